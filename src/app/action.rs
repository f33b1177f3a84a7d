#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Kick off the scripted connection to the chosen server.
    StartConnect { nickname: String, server_name: String },
    /// Stagger the channel joins.
    StartChannelJoins { channels: Vec<String> },
    /// Start replaying a channel's blended stream.
    StartReplay { channel: String },
    Quit,
}

use crossterm::event::Event as CrosstermEvent;

use crate::script::banner::BannerLine;
use crate::script::record::EventRecord;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One line of the connect banner arrived in the status window
    BannerLine(BannerLine),

    /// The scripted connection finished its handshake
    Connected,

    /// The client joined one of its channels
    ChannelJoined {
        channel: String,
    },

    /// A scripted event fired for a channel
    Scripted {
        channel: String,
        record: EventRecord,
    },

    /// A channel's replay reached the end of its stream
    ReplayComplete {
        channel: String,
    },

    /// Tick for UI refresh
    Tick,
}

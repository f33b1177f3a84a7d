//! Synthetic /whois answers. The mask is derived from the nick so the
//! same person always whoises the same.

use rand::RngExt;

use crate::script::data::{SERVER_HOST, SERVER_NAME};

const ALWAYS_REGISTERED: &[&str] = &["bLueStar", "esmerim_23", "NiGDe", "BoRaN", "KartaL", "Kerem"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoisInfo {
    pub nick: String,
    pub mask: String,
    pub realname: String,
    pub registration: String,
    pub channels: Vec<String>,
    pub server: String,
}

/// Nick-keyed mask: same nick, same cloak.
fn mask_for(nick: &str) -> String {
    let hash: u32 = nick.chars().map(|c| c as u32).sum();
    let tail: String = (0..8u32)
        .map(|i| {
            let code = (hash.wrapping_mul(i + 1).wrapping_mul(7)) % 36;
            if code < 10 {
                char::from_digit(code, 10).unwrap_or('0')
            } else {
                (b'A' + (code - 10) as u8) as char
            }
        })
        .collect();
    format!("PAPATYAv7@77.12.{}.sibertr.online", tail)
}

fn registration_line(nick: &str) -> String {
    let registered = ALWAYS_REGISTERED.contains(&nick)
        || rand::rng().random_range(0.0..1.0) > 0.3;
    if registered {
        format!("{} Kayıtlı bir nicktir", nick)
    } else {
        format!("{} Kayıtlı bir nick değildir", nick)
    }
}

/// Build the whois answer for `nick`, listing the channels it was seen in.
pub fn whois_info(nick: &str, channels: Vec<String>) -> WhoisInfo {
    WhoisInfo {
        nick: nick.to_string(),
        mask: mask_for(nick),
        realname: SERVER_HOST.to_string(),
        registration: registration_line(nick),
        channels,
        server: format!("{} - {}", SERVER_NAME, SERVER_HOST),
    }
}

impl WhoisInfo {
    /// Status-window rendering, one line per field.
    pub fn console_lines(&self) -> Vec<String> {
        let channels = if self.channels.is_empty() {
            "Yok".to_string()
        } else {
            self.channels.join(" ")
        };
        vec![
            format!("~ Nick: {}", self.nick),
            format!("~ IP: {}", self.mask),
            format!("~ İsim: {}", self.realname),
            format!("~ Rumuz Bilgi: {}", self.registration),
            format!("~ Kanallar: {}", channels),
            format!("~ Server: {}", self.server),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_is_deterministic_per_nick() {
        assert_eq!(mask_for("Gezgin"), mask_for("Gezgin"));
        assert_ne!(mask_for("Gezgin"), mask_for("Misafir"));
        assert!(mask_for("Gezgin").starts_with("PAPATYAv7@77.12."));
    }

    #[test]
    fn staff_is_always_registered() {
        for _ in 0..50 {
            assert!(registration_line("bLueStar").ends_with("Kayıtlı bir nicktir"));
        }
    }

    #[test]
    fn console_lines_cover_every_field() {
        let info = whois_info("Gezgin", vec!["#PAPATYA".into()]);
        let lines = info.console_lines();
        assert_eq!(lines.len(), 6);
        assert!(lines[4].contains("#PAPATYA"));

        let empty = whois_info("Gezgin", Vec::new());
        assert!(empty.console_lines()[4].ends_with("Yok"));
    }
}

//! The connect banner: the wall of server notices, numerics, and MOTD
//! chrome a mid-2000s Turkish network greeted you with.

use chrono::{Datelike, Local, Timelike};
use rand::RngExt;

use crate::script::data::{ROOT_ADMIN, SCRIPT_NAME, SCRIPT_VERSION, SERVER_HOST};

/// Paint class for one banner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Navy,
    Green,
    Red,
    Gray,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerLine {
    pub message: String,
    pub tone: BannerTone,
}

impl BannerLine {
    fn new(message: impl Into<String>, tone: BannerTone) -> Self {
        Self {
            message: message.into(),
            tone,
        }
    }
}

const HOST_PREFIXES: &[&str] = &["Yuzuk", "SiberTR", "Papatya"];
const HOST_DOMAINS: &[&str] = &["hsd1.ma.comcast.net", "sibertr.online", "comcast.net"];

/// A plausible cloaked local hostname.
fn random_hostname() -> String {
    let mut rng = rand::rng();
    let prefix = HOST_PREFIXES[rng.random_range(0..HOST_PREFIXES.len())];
    let domain = HOST_DOMAINS[rng.random_range(0..HOST_DOMAINS.len())];
    let hex: String = (0..8)
        .map(|_| {
            let digit = rng.random_range(0..16u32);
            char::from_digit(digit, 16)
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('0')
        })
        .collect();
    format!("{}-{}.{}", prefix, hex, domain)
}

fn random_ip() -> String {
    let mut rng = rand::rng();
    format!(
        "{}.{}.{}.{}",
        rng.random_range(1..=255u16),
        rng.random_range(1..=255u16),
        rng.random_range(1..=255u16),
        rng.random_range(1..=255u16),
    )
}

const DAYS_TR: &[&str] = &[
    "Pazar",
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
];
const MONTHS_TR: &[&str] = &[
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// "21 Kasım 2025 Cuma- Saat: 22:09:57", in local time.
fn connection_datetime() -> String {
    let now = Local::now();
    let day_name = DAYS_TR[now.weekday().num_days_from_sunday() as usize];
    let month = MONTHS_TR[now.month0() as usize];
    format!(
        "{} {} {} {}- Saat: {:02}:{:02}:{:02}",
        now.day(),
        month,
        now.year(),
        day_name,
        now.hour(),
        now.minute(),
        now.second(),
    )
}

/// The full banner for one connection, freshly randomized.
pub fn generate_banner(nickname: &str, server_name: &str) -> Vec<BannerLine> {
    use BannerTone::{Gray, Green, Navy, Red};

    let mut rng = rand::rng();
    let hostname = random_hostname();
    let ip = random_ip();
    let server_users: u32 = rng.random_range(30..130);
    let network_users: u32 = rng.random_range(200..400);
    let max_server_users: u32 = rng.random_range(3500..7500);
    let max_network_users: u32 = rng.random_range(250..650);
    let irc_ops: u32 = rng.random_range(8..23);
    let active_channels: u32 = rng.random_range(70..120);
    let clean_server: String = server_name.split_whitespace().collect();

    vec![
        BannerLine::new(format!("* Connecting to {} (6667)", SERVER_HOST), Navy),
        BannerLine::new("Ping? Pong!", Green),
        BannerLine::new("[IRC VERSION]", Navy),
        BannerLine::new(
            format!(
                "-> [IRC] VERSION {} MIRC {} by {}",
                SCRIPT_NAME, SCRIPT_VERSION, ROOT_ADMIN
            ),
            Navy,
        ),
        BannerLine::new(
            format!(
                "-{}- Sunucumuza bağlantı zamanınız: {}",
                clean_server,
                connection_datetime()
            ),
            Red,
        ),
        BannerLine::new("Hoşgeldin", Navy),
        BannerLine::new(
            format!("Server versionu: {} {}", SCRIPT_NAME, SCRIPT_VERSION),
            Gray,
        ),
        BannerLine::new(
            "Server Kuruluş Tarihi: 01.01.2020 tarihinde kurulmuştur.",
            Gray,
        ),
        BannerLine::new(
            format!(
                "Sunucu Adı: {} Kullanıcı: {} Çalışan Version: {} Mode: +iwx",
                server_name, nickname, SCRIPT_VERSION
            ),
            Gray,
        ),
        BannerLine::new("HCN MAXCHANNELS=10 CHANLIMIT=#:10 HCN NICKLEN=30", Navy),
        BannerLine::new(
            "SILENCE=15 MODES=12 CHANTYPES=# SILENCE=15 CHANMODES=bel,kfL,lj,psmntirRcOAQKVCuzNSMTGZ",
            Navy,
        ),
        BannerLine::new(format!("Hostunuz ({}) olarak gizlenmiştir.", hostname), Gray),
        BannerLine::new(
            format!("Toplam kullanıcı sayısı: {} kullanıcı", server_users),
            Gray,
        ),
        BannerLine::new(format!("IRC'de olan IRCop sayısı: {}", irc_ops), Gray),
        BannerLine::new(format!("Aktif kanal sayısı: {}", active_channels), Gray),
        BannerLine::new(
            format!(
                "Sunucudaki kullanıcı sayısı: {} En çok: {}",
                server_users, max_server_users
            ),
            Gray,
        ),
        BannerLine::new(
            format!(
                "Ağ üzerindeki kullanıcı sayısı: {} En çok: {}",
                network_users, max_network_users
            ),
            Gray,
        ),
        BannerLine::new("«[Server Motd Başlangıcı ]»", Navy),
        BannerLine::new("─────────────────────────────────────────", Gray),
        BannerLine::new("«[Server Motd Sonu ]»", Navy),
        BannerLine::new(format!("* {} sets mode: +iwxY", nickname), Navy),
        BannerLine::new(format!("Local host: {} ({})", hostname, ip), Gray),
        BannerLine::new(
            format!(
                "* ChanServ [services@{}] is on IRC (1379:20) (Kanal Servisi)",
                clean_server
            ),
            Navy,
        ),
        BannerLine::new(
            format!(
                "* MemoServ [services@{}] is on IRC (1379:20) (Mesaj Servisi)",
                clean_server
            ),
            Navy,
        ),
        BannerLine::new(
            format!(
                "* NickServ [services@{}] is on IRC (1379:20) (Nick Servisi)",
                clean_server
            ),
            Navy,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_mentions_nick_and_server() {
        let lines = generate_banner("DeLi_Kiz", "SiberTR.Net");
        assert!(lines.iter().any(|l| l.message.contains("DeLi_Kiz")));
        assert!(lines.iter().any(|l| l.message.contains("SiberTR.Net")));
        assert!(lines.len() >= 20);
    }

    #[test]
    fn services_lines_use_spaceless_server_name() {
        let lines = generate_banner("ben", "Sohbet Hane");
        let services: Vec<_> = lines
            .iter()
            .filter(|l| l.message.contains("is on IRC"))
            .collect();
        assert_eq!(services.len(), 3);
        assert!(services.iter().all(|l| l.message.contains("services@SohbetHane")));
    }

    #[test]
    fn hostname_has_house_shape() {
        let host = random_hostname();
        let (prefix, rest) = host.split_once('-').unwrap();
        assert!(HOST_PREFIXES.contains(&prefix));
        let (hex, _domain) = rest.split_once('.').unwrap();
        assert_eq!(hex.len(), 8);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn datetime_is_turkish() {
        let dt = connection_datetime();
        assert!(dt.contains("Saat:"));
        assert!(DAYS_TR.iter().any(|d| dt.contains(d)));
    }
}

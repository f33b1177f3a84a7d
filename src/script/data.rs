//! Authored script content: network constants, the nickname pool, staff
//! nicks, channel topics, connect-dialog server choices, and the canned
//! conversation logs for the three channels.
//!
//! Everything here is static data; the generator, blender, and scheduler
//! turn it into a live-looking room.

use crate::script::record::EventRecord;

pub const SCRIPT_NAME: &str = "PAPATYA";
pub const SCRIPT_VERSION: &str = "v7";
pub const SERVER_NAME: &str = "SiberTR IRC Network";
pub const SERVER_HOST: &str = "irc.sibertr.online";
pub const ROOT_ADMIN: &str = "bLueStar";

/// Channels joined after connecting, in join order.
pub const CHANNELS: &[&str] = &["#str_chat", "#PAPATYA", "#Webcam"];

/// Staff nicks pinned into every roster: owner first, then ops.
pub const STAFF: &[(&str, &str)] = &[("bLueStar", "~"), ("esmerim_23", "@"), ("NiGDe", "@")];

/// Server buttons shown in the connect dialog.
pub const SERVER_CHOICES: &[(&str, &str, u16)] = &[
    ("SohbetHane.Net", "irc.sohbethane.net", 6667),
    ("SiberTR.Net", "irc.sibertr.online", 6667),
    ("TurkMuhabbet.Com", "irc.turkmuhabbet.com", 6667),
    ("ChatNet", "irc.chatnet.net", 6667),
    ("mIRCIndir", "irc.mircindir.net", 6667),
    ("Hayta", "irc.hayta.net", 6667),
    ("mIRCTurk", "irc.mircturk.net", 6667),
    ("Sohbete", "irc.sohbete.net", 6667),
    ("MyNet", "irc.mynet.net", 6667),
    ("Papatya", "irc.papatya.net", 6667),
    ("Bitanem", "irc.bitanem.net", 6667),
    ("Klavye", "irc.klavye.net", 6667),
];

pub fn channel_topic(channel: &str) -> &'static str {
    match channel {
        "#str_chat" => "SiberTR sohbet odasına hoşgeldiniz — seviyeli sohbet",
        "#PAPATYA" => "PAPATYA Script v7 — www.sibertr.online",
        "#Webcam" => "Kameralı sohbet odası — izinsiz yayın yasaktır",
        _ => "",
    }
}

/// The nickname pool synthetic joins and lurkers draw from. Scraped from
/// real mid-2000s Turkish IRC user lists, plus filler variations.
pub const NICKNAME_POOL: &[&str] = &[
    "Abcd", "Absinthe", "achiL", "Ada", "Adem", "aFa", "AfraN", "Agathadaimon",
    "Agrippa", "ahmetserkan", "Albatros", "ALem", "Alena", "alfarolex", "Ali",
    "Allecra", "AlpereN", "aLtimod", "Anaxagoras", "Aperson", "Ares", "AriC",
    "AspavA", "aSpeNDos", "AutomatiC", "AYARSIZ", "ayhan3", "Aylin", "Aytac",
    "Ayışığı", "Azely", "AzrA", "BarisBkmz", "Beatrice", "Beer", "BeiZa", "Berat",
    "Berk07", "bliss", "Bora", "BoRaN", "Burak-", "Buz", "By.Gece", "By_ATMACA",
    "Cadde_li", "CaNeRR", "capta1n", "cetoisak", "charizma", "Che", "Chelt",
    "CiyopiS", "ClupSohbet", "Coderlab", "coders", "Convex", "CORDON_BLEU", "Çöl",
    "d3L", "D3vr4N", "dae", "Dahaka", "Dedecan61", "dELi", "Demet34", "DeRBeDeR^",
    "Derya", "Discorium", "Domain", "DomainSatisi", "dOubLe", "eCeAy", "EdaLi",
    "eFe", "eiffel65", "Ekim", "eLfida", "Emrehan", "esekherif", "Eyluls",
    "Feronia", "Fikoo", "Fikret", "Forbidden", "fredyy", "Furkan-", "Gazino",
    "Gece", "GhostLy", "gRaL", "Gravity", "GulaSor", "Gurkan", "HackMan", "HaDeMe",
    "Hangman", "Harika", "HatemOgLu", "Heavenly", "Hesna", "HOROZ", "Hypatia!",
    "HyTecH", "IF-AI", "immortaL", "ImOriqinaL", "IrCbaStarD", "Irem", "JuDGe",
    "Kad", "Kalemzede", "Kamal", "KarabuluT", "KartaL", "keniShai", "Kerem",
    "Kharon", "knk", "Knox.", "KocaaLi", "Lawliet", "Liva", "Lose", "manikdepresif",
    "MateJaN", "meLanie", "Mervee", "Mihre", "MoHaC", "MoMoXa", "Murphy", "Mys",
    "NeverLove", "neXus", "Notcafe", "NucLeaR", "Oblivion", "Ocean", "omeGa",
    "Onurcann", "oSeNLuRDa_YaKa", "Pdocia", "PentagoN", "Pentagram", "Prosabox",
    "PySSyCaT", "Redworm", "ReisELLa", "ReSitaL", "RisK", "Risque", "RoCKeR",
    "Roger", "Ryu", "Ryze", "S3m1h", "S4S", "SamaEL`", "Sans", "SatO", "Sauron",
    "saydek", "scope", "Seden", "Selma", "shera_hanif", "Siyah", "SNOOPY",
    "Sohbetimsin", "Spacely", "Sparrow", "SpOkE", "Stskeep", "SucLu", "SuLh",
    "Supervisor", "Suzuki", "syasarizmir", "SınırımızGökyüzü", "temonde", "thelord",
    "Tupac", "Turk06", "Turkeri", "TövbeKaR", "uFuK", "Unknown", "UzmaN", "Vision",
    "volkan1tech", "woopie", "X", "Xadd1", "Xander", "xqxq", "xspy", "xwerswoodx",
    "Yabann", "Yalovali", "YekTa", "YouMyCure", "Yunus", "ZaferSahin", "ZaLiM1979",
    "Zanay", "Zardoz", "ZeL", "zetty", "ÖmerAsaF", "_KaCaK_",
    "Aphrodite", "BlackDragon", "CyberKnight", "DarkAngel", "EternalFlame",
    "FrostBite", "GameMaster", "HeartBreaker", "IceQueen", "JokerFace",
    "KnightRider", "LoneWolf", "MidnightSun", "NightHawk", "OceanDream",
    "PhoenixRising", "QuantumLeap", "RainbowWarrior", "SilverBullet", "ThunderStorm",
    "UltraViolet", "VenomStrike", "WhiteKnight", "XtremeGamer", "YellowSubmarine",
    "ZeroGravity", "Akira", "Blade", "Cipher", "Dagger", "Eclipse",
    "Falcon", "Ghost", "Hunter", "Inferno", "Joker", "Killer",
    "Legend", "Matrix", "Ninja", "Omega", "Phantom", "Quantum",
    "Raven", "Shadow", "Titan", "Ultra", "Viper", "Warrior",
    "Xenon", "Yakuza", "Zodiac", "Alpha", "Beta", "Delta",
];

/// Compact authored-log notation, expanded by [`expand`].
enum Line {
    /// Chat: user, text.
    C(&'static str, &'static str),
    /// Login: user, hostmask.
    L(&'static str, &'static str),
    /// Quit: user, hostmask.
    Q(&'static str, &'static str),
    /// Nick change: user, new nick.
    N(&'static str, &'static str),
}

fn expand(lines: &[Line], channel: &str) -> Vec<EventRecord> {
    lines
        .iter()
        .map(|line| match *line {
            Line::C(user, text) => EventRecord::chat(user, text),
            Line::L(user, mask) => EventRecord::login(user, mask, channel),
            Line::Q(user, mask) => EventRecord::quit(user, mask),
            Line::N(user, new_nick) => EventRecord::nick_change(user, new_nick),
        })
        .collect()
}

/// Authored conversation log for a channel, or an empty log for channels
/// without one.
pub fn authored_log(channel: &str) -> Vec<EventRecord> {
    match channel {
        "#str_chat" => expand(STR_CHAT_LOG, "#str_chat"),
        "#PAPATYA" => expand(PAPATYA_LOG, "#PAPATYA"),
        "#Webcam" => expand(WEBCAM_LOG, "#Webcam"),
        _ => Vec::new(),
    }
}

use Line::{C, L, N, Q};

static STR_CHAT_LOG: &[Line] = &[
    C("Contura", "Bişeyi anlayamıyorum bile kafam hamura dönüyor"),
    C("Contura", "Açmasan atar gider yapıyor"),
    C("Contura", "Telefon"),
    C("Mina", "Herşey çok çabuk eskitiliyor"),
    C("Mina", "Çok çabuk değişiyor olaylar"),
    N("Hazal", "Hazal' Away"),
    C("Mina", "Maksatta bu belki"),
    C("Mina", "Kafaların karışması"),
    C("Contura", "yazmık ettiler bizim gibilerine senin gibilerine"),
    C("Contura", "Hiç durma aynı adamla telefon görüşmesi yapılır mı"),
    C("Mina", "Nasıl :)))))"),
    C("Contura", "Telefon rehberinde yaklaşık 400 tane adam var 1000 de 1000'i aynı adam aramakta"),
    L("sevde", "PAPATYAv7@D9.52.952D5224.sibertr.net"),
    L("aysunn", "TurkishM@25.C9.8974D62C.sibertr.net"),
    C("Contura", "Misal verdim de yani"),
    C("Contura", "Yaa :)"),
    L("PAPATYAv7-439", "PAPATYAv7@B0.DB.2F75F3CA.sibertr.net"),
    L("Pokemon", "PAPATYAv7@5.2E.21061F6E.sibertr.net"),
    C("Mina", "Anladım"),
    Q("Hazal' Away", "PAPATYAv7@5.19.9B5EAEA4.sibertr.net"),
    C("Contura", "Bayan olsa da sesini duysan ama nerde duyamam"),
    L("Cokgec", "PAPATYAv7@1F.8E.ECA2AA37.sibertr.net"),
    C("Mina", "Kafamızın içi yüzlerce topla dolu havada uçuşuyorlar"),
    C("Naren", "Ortalık karıştı"),
    C("MelekSy", "güzeldi"),
    C("KeeN", "Jerry ortalık aslında bi platform gibi bişi"),
    C("Gebze", "Gebze"),
    C("andaloutase", "Meleksy hg"),
    Q("M33_", "MobilTurki@55.6A.AB90C31D.sibertr.net"),
    C("andaloutase", "Rica"),
    C("Esme", "ozelkapat"),
    Q("Semra560", "PAPATYAv7@4E.BE.4BF22D6C.sibertr.net"),
    L("EBRAR", "TurkishM@58.E5.3C4CDAB7.sibertr.net"),
    C("KeeN", "Öğretmen bi dişi alıcam :D"),
    C("Esme", "En doğrusu bu burda"),
    C("kleopatra", "dışı ne ya dndjdnnd"),
    C("kleopatra", "Hayırın çiftleştiriyo sanki"),
    C("KeeN", "Ciloçapatat öğretmen dişi alıcam shshshs"),
    C("MelekSy", "sen ne anlatıyorsun"),
    L("Boran", "PAPATYAv7@3A.8C.F7B22134.sibertr.net"),
    C("Boran", "selam millet neler donuyor"),
    C("Eylul", "hosgeldin boran sakin buralar"),
    C("Eren_57", "birkac kisi vardi az once ama dagildilar"),
    C("Boran", "bugun cok sessiz ya eskiden boyle degildi"),
    L("Zehra", "PAPATYAv7@5D.9F.2A3E451B.sibertr.net"),
    C("Zehra", "selam herkese"),
    C("Eylul", "merhaba zehra hosgeldin"),
    C("Zehra", "hosbulduk bugun neler konustunuz"),
    C("Eren_57", "pek bi sey yok sessizdi burasi"),
    C("Zehra", "neyse biraz hareket getirelim su an ne yapiyorsunuz"),
    C("Boran", "ben netflixe bakiyordum ama sikildim biraz"),
    C("Eylul", "ben de muzik dinliyorum yeni bir playlist yaptim"),
    Q("Eren_57", "PAPATYAv7@2B.6A.1E4D894A.sibertr.net"),
    C("Zehra", "eren gitti sanirim"),
    C("Eylul", "evet ya sessizce kacti"),
    L("OmerCan", "PAPATYAv7@7E.88.3D221A5B.sibertr.net"),
    C("OmerCan", "selam dostlar ne yapiyorsunuz"),
    C("Boran", "hosgeldin omercan cok bi sey yok muhabbet ediyoruz"),
    C("OmerCan", "guzel guzel ben de katilayim"),
    N("Eylul", "Eylul_99"),
    C("Zehra", "aaa eylul ismini degistirdi"),
    C("Eylul_99", "evet ya biraz degisiklik olsun dedim"),
    Q("Boran", "PAPATYAv7@3A.8C.F7B22134.sibertr.net"),
    C("OmerCan", "boran da gitti sanirim"),
    C("Eylul_99", "evet yine az kaldik"),
    L("Mert_", "PAPATYAv7@4D.73.A6F5D122.sibertr.net"),
    C("Mert_", "Selam millet, kaçırdığım bir şey var mı?"),
    L("melis_", "PAPATYAv7@6F.2D.9B7C1123.sibertr.net"),
    C("melis_", "slm kimler var?"),
    C("irem34", "heeey melisss naber :))"),
    C("melis_", "heyy iremm, iyiii iştee sennn??"),
    C("irem34", "ayyyy napim ya iş güç işte klasik"),
    C("melis_", "aynen ya, bende sabahtan beri ders çalışıyom kafam yandı sdfds"),
    L("nisa_98", "PAPATYAv7@7E.88.3D221A5B.sibertr.net"),
    C("nisa_98", "selam kızlar ne anlatıyonuzz :p"),
    C("melis_", "ayy nisaaa geldii :D"),
    C("irem34", "günahımı anlatıyorum :P sdfgfdg"),
    C("nisa_98", "yok yaa ben de çok sıkıldm napalım ya :("),
    C("nisa_98", "dizi önerin kankiler ben açıyım bari"),
    C("melis_", "ay şu an netflixe bakan bi tek ben değilim dmi sdfgsdfg"),
    C("irem34", "sjsjsjs aynen yaaa"),
    Q("irem34", "PAPATYAv7@2B.6A.1E4D894A.sibertr.net"),
    C("melis_", "irem çıktı yaa kaldık başbaşa sdfsd"),
    C("nisa_98", "napcaz kız kısır falan mı yoğurak sdfgdfg"),
    L("eda_", "PAPATYAv7@5E.4D.8C56B7E3.sibertr.net"),
    C("eda_", "meraba bu oda aktif mi :D"),
    C("melis_", "aktifiz şekerim hoşgeldin xd"),
    C("eda_", "saol cnmm neler dönüyo :)"),
    C("nisa_98", "dedikodu tabii ne olcak sdfgdfg"),
    C("eda_", "ay canım yaa ben de biraz oturuyum burda"),
    N("melis_", "meloshhh"),
    C("meloshhh", "ayy bi değişiklik olsun dedim sdfsdg"),
    Q("nisa_98", "PAPATYAv7@3A.8C.F7B22134.sibertr.net"),
    C("eda_", "yine eksildik ya sdfsd"),
    C("meloshhh", "yok ya ben de kapatıcam azdan"),
    Q("meloshhh", "PAPATYAv7@6F.2D.9B7C1123.sibertr.net"),
    C("eda_", "tek kaldım :)"),
];

static PAPATYA_LOG: &[Line] = &[
    C("BoRaN", "selam papatya ailesi bugun nasilsiniz"),
    C("KartaL", "selam bora iyiyiz sen nasilsin"),
    C("BoRaN", "iyi iyi yeni uyelerimizi tanilalim mi"),
    L("Emrehan", "PAPATYAv7@4A.2B.1C3D456E.sibertr.net"),
    C("KartaL", "hosgeldin emrehan papatyaya katildigin icin tesekkurler"),
    C("Emrehan", "tesekkurler burayi cok begendim"),
    C("BoRaN", "bu hafta sunucu guncellemeleri hakkinda bilgi verebilir miyiz"),
    C("HyTecH", "tabii yeni ozellikler ve guvenlik guncellemeleri geliyor"),
    L("Fikret", "PAPATYAv7@7E.9F.2A1B3C4D.sibertr.net"),
    C("KartaL", "fikret uzun zamandir yoktun hosgeldin"),
    C("Fikret", "evet ya is yogunlugu vardi simdi daha aktif olacagim"),
    C("BoRaN", "guzel bu arada yeni kurallarimiz var bir goz atmani oneririm"),
    C("Fikret", "tabii hemen bakacagim saygili davranis konusunda sorun yok"),
    C("KartaL", "mukemmel bu yuzden papatya ailesi olarak boyle guzel bir ortamimiz var"),
    C("Emrehan", "bu hafta sonu etkinlik var mi"),
    C("Supervisor", "evet cumartesi aksami buyuk sohbet etkinligimiz var"),
    C("Fikret", "harika katilacagim kesinlikle"),
    Q("HyTecH", "PAPATYAv7@3F.5A.8B2C4D6E.sibertr.net"),
    C("BoRaN", "hytech gitti muhtemelen sunucu bakimina basladi"),
    C("KartaL", "bu arada yeni uyelerimize ozel hediyelerimiz var"),
    C("Emrehan", "ne tur hediyeler bunlar cok merak ettim"),
    C("Supervisor", "ozel ranklar renkli nickler ve daha fazlasi"),
    L("Kerem", "PAPATYAv7@6D.8E.9F1A2B3C.sibertr.net"),
    C("BoRaN", "selam kerem moderatorluk nasil gidiyor"),
    C("Kerem", "iyi gidiyor topluluk gercekten saygili ve guzel"),
    C("Fikret", "bu papatyanin en guzel yani zaten herkes birbirine saygili"),
    C("Emrehan", "kesinlikle bu yuzden burada olmaktan gurur duyuyorum"),
    N("Emrehan", "Eyluls"),
    C("KartaL", "aaa isim degistirdin eyluls guzel olmus"),
    C("Eyluls", "evet burayi cok sevdigim icin boyle yaptim"),
    C("BoRaN", "cok guzel bu tur guzel davranislar papatyayi ozel kiliyor"),
];

static WEBCAM_LOG: &[Line] = &[
    C("Gece", "selam webcam kanali bugun kimler kamerayi acacak"),
    L("Güzel_Kiz_23", "PAPATYAv7@2A.4B.6C8D9E0F.sibertr.net"),
    C("Güzel_Kiz_23", "selam ben kamerami acabilirim"),
    C("Gece", "harika guzel kiz kamerayi aciyor baskalari da katilabilir"),
    L("Yakışıklı_Erkek", "PAPATYAv7@5E.7F.1A2B3C4D.sibertr.net"),
    C("Yakışıklı_Erkek", "selam ben de katilabilir miyim"),
    C("Gece", "tabii ki hosgeldin yakisikli erkek"),
    C("Güzel_Kiz_23", "bu aksam ne yapiyoruz grup sohbet mi"),
    C("Yakışıklı_Erkek", "evet grup sohbet yapabiliriz herkes kendi kamerayi acabilir"),
    L("Sevimli_Kedi", "PAPATYAv7@8C.9D.0E1F2A3B.sibertr.net"),
    C("Sevimli_Kedi", "merhaba ben de katilayim mi"),
    C("Güzel_Kiz_23", "tabii sevimli kedi hosgeldin"),
    C("Yakışıklı_Erkek", "kac kisiyiz su an hepsini gorebilir miyiz"),
    C("Gece", "su an 3 kisiiz daha fazla kisi katilabilir"),
    C("Güzel_Kiz_23", "ben kamerami actim goruyor musunuz"),
    C("Yakışıklı_Erkek", "evet goruyorum cok guzel gorunuyorsun"),
    C("Güzel_Kiz_23", "tesekkurler sen de ac bakalim"),
    C("Yakışıklı_Erkek", "tamam ben de aciyorum sevimli kedi sen de katil"),
    C("Sevimli_Kedi", "ben de aciyorum merak ediyorum nasil gorunuyorum"),
    L("Sohbet_Adam", "PAPATYAv7@3B.5C.7D8E9F0A.sibertr.net"),
    C("Sohbet_Adam", "selam bu kanalda ne yapiliyor"),
    C("Gece", "webcam sohbeti yapiyoruz katilmak ister misin"),
    C("Sohbet_Adam", "tabii ben de kamerami acabilirim"),
    C("Güzel_Kiz_23", "harika simdi 4 kisiiz herkes guzel gorunuyor"),
    C("Sevimli_Kedi", "bu aksam cok eglenceli geciyor tesekkurler herkese"),
    C("Yakışıklı_Erkek", "evet ya guzel bir grup olduk duzenli bulusalim boyle"),
    Q("Sohbet_Adam", "PAPATYAv7@3B.5C.7D8E9F0A.sibertr.net"),
    C("Güzel_Kiz_23", "sohbet adam gitti devam edelim mi"),
    C("Sevimli_Kedi", "tabii devam edelim bu cok eglenceli"),
    C("Yakışıklı_Erkek", "bu kanali cok seviyorum insanlarla tanismak guzel"),
    C("Güzel_Kiz_23", "ben de papatyanin en guzel kanallarindan biri bu"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::record::EventKind;

    #[test]
    fn every_channel_has_a_log() {
        for ch in CHANNELS {
            assert!(!authored_log(ch).is_empty(), "no log for {}", ch);
        }
        assert!(authored_log("#Radyo").is_empty());
    }

    #[test]
    fn expanded_logins_carry_channel_and_mask() {
        let log = authored_log("#PAPATYA");
        let login = log
            .iter()
            .find(|r| r.kind == EventKind::Login)
            .expect("log has logins");
        assert_eq!(login.channel.as_deref(), Some("#PAPATYA"));
        assert!(login.hostmask.as_deref().unwrap().contains('@'));
    }

    #[test]
    fn pool_is_large_and_dedup_friendly() {
        assert!(NICKNAME_POOL.len() > 200);
    }

    #[test]
    fn staff_starts_with_owner() {
        assert_eq!(STAFF[0], ("bLueStar", "~"));
    }
}

//! Fixed startup dataset for the event store.
//!
//! # Responsibility
//! - Carry the launch catalogue of thirteen events and the bootstrap admin
//!   account.
//! - Install them into a freshly migrated store at process start.
//!
//! # Invariants
//! - Seed ids are "1" through "13" and stay numeric so id assignment keeps
//!   working after startup.
//! - Every seed record satisfies the write-path validation rules.

use crate::db::open_db_in_memory;
use crate::model::account::Account;
use crate::model::event::Event;
use crate::repo::account_repo::{AccountRepository, SqliteAccountRepository};
use crate::repo::event_repo::{RepoResult, SqliteEventRepository};
use crate::service::account_service::password_digest;
use log::info;
use rusqlite::Connection;
use std::time::Instant;

/// Username of the bootstrap admin account.
pub const SEED_ADMIN_USERNAME: &str = "admin";
const SEED_ADMIN_EMAIL: &str = "admin@example.com";
const SEED_ADMIN_PASSWORD: &str = "password123";

/// Installs the seed events and the bootstrap admin account.
///
/// Expects a migrated, empty store; called once at process start.
///
/// # Side effects
/// - Emits a `seed_install` logging event with counts and duration.
pub fn install_seed(conn: &mut Connection) -> RepoResult<()> {
    let started_at = Instant::now();

    let events = seed_events();
    let event_count = events.len();
    {
        let mut repo = SqliteEventRepository::try_new(conn)?;
        for event in &events {
            repo.import_event(event)?;
        }
    }

    let mut accounts = SqliteAccountRepository::try_new(conn)?;
    accounts.insert_account(&Account {
        username: SEED_ADMIN_USERNAME.to_string(),
        email: SEED_ADMIN_EMAIL.to_string(),
        password_digest: password_digest(SEED_ADMIN_USERNAME, SEED_ADMIN_PASSWORD),
        is_admin: true,
    })?;

    info!(
        "event=seed_install module=seed status=ok events={event_count} accounts=1 duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(())
}

/// Opens an in-memory store with migrations applied and the seed installed.
///
/// This is the configuration the listing application runs with.
pub fn open_seeded_in_memory() -> RepoResult<Connection> {
    let mut conn = open_db_in_memory()?;
    install_seed(&mut conn)?;
    Ok(conn)
}

/// Returns the launch catalogue in insertion order.
pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Paint and Sip".to_string(),
            image: "/static/images/paint.png".to_string(),
            year: "2025".to_string(),
            location: "Hamilton 309".to_string(),
            summary: "The Vietnamese Student Association proudly presents its Paint and Sip event, a vibrant gathering where creativity meets cultural appreciation. Attendees will enjoy a guided painting session featuring Vietnamese-inspired landscapes or cultural symbols, accompanied by bubble tea and traditional snacks. This event offers students a chance to unwind, socialize, and connect with Vietnamese art in a relaxed atmosphere. All skill levels are welcome, and all materials will be provided for participants."
                .to_string(),
            popular_activities: vec![
                "Guided painting".to_string(),
                "Tasting".to_string(),
                "Community bonding".to_string(),
                "Photo booth".to_string(),
            ],
        },
        Event {
            id: "2".to_string(),
            title: "Valentine's Day Table".to_string(),
            image: "/static/images/valentine.png".to_string(),
            year: "2025".to_string(),
            location: "Lerner Ramps Table 4".to_string(),
            summary: "The Vietnamese Student Association welcomes you to our Valentine's Day tabling event! Stop by our beautifully decorated booth to experience the intersection of Vietnamese culture and the celebration of love. Write love letters using Vietnamese calligraphy, enjoy heart-shaped bánh cookies, and learn about how Valentine's Day is celebrated in Vietnam compared to Western traditions. This interactive event provides a perfect opportunity to learn about cultural expressions of love while enjoying sweet treats and making personalized valentines."
                .to_string(),
            popular_activities: vec![
                "Vietnamese calligraphy".to_string(),
                "Community bonding".to_string(),
                "Heart-shaped bánh cookies".to_string(),
                "Photo booth".to_string(),
            ],
        },
        Event {
            id: "3".to_string(),
            title: "Tet Celebration".to_string(),
            image: "/static/images/tet.png".to_string(),
            year: "2025".to_string(),
            location: "Lerner 555".to_string(),
            summary: "Join us for a vibrant celebration of Tet, the Vietnamese Lunar New Year! Our special event features enchanting musical performances from three talented artists of the Vietnamese Creative Society who will showcase traditional and contemporary Vietnamese songs. Immerse yourself in cultural displays including traditional dress (áo dài), lion dances, and festive decorations that symbolize prosperity and good fortune. Guests will enjoy authentic Vietnamese cuisine and participate in cultural activities like red envelope exchanges and traditional games."
                .to_string(),
            popular_activities: vec![
                "Musical performances".to_string(),
                "Lion dance".to_string(),
                "Tasting".to_string(),
                "Games".to_string(),
                "Red envelope exchange".to_string(),
            ],
        },
        Event {
            id: "4".to_string(),
            title: "Study Hall".to_string(),
            image: "/static/images/study.png".to_string(),
            year: "2025".to_string(),
            location: "Lerner Satow".to_string(),
            summary: "Join the Vietnamese Student Association for our Study Hall event, where productivity meets community! This dedicated study session offers a supportive environment for students to focus on academics while connecting with peers. Fuel your study session with complimentary Vietnamese coffee and snacks that provide the perfect brain boost. Our Study Hall features designated quiet zones, group work areas, and study resources to accommodate different learning styles. VSA officers will be available to provide academic support and facilitate connections between students studying similar subjects."
                .to_string(),
            popular_activities: vec![
                "Quiet study areas".to_string(),
                "Group work spaces".to_string(),
                "Snack bar".to_string(),
                "Tutoring resources".to_string(),
            ],
        },
        Event {
            id: "5".to_string(),
            title: "Poetry Night".to_string(),
            image: "/static/images/poetry.png".to_string(),
            year: "2024".to_string(),
            location: "403 Kent Hall".to_string(),
            summary: "Join us for an enchanting evening at the Vietnamese Student Association's Poetry Night, where words and emotions come alive in a celebration of creative expression. Experience powerful performances featuring both Vietnamese and English poetry that explores themes of identity, diaspora, heritage, and personal journeys. Our welcoming atmosphere encourages all attendees to share their original work during our open mic session, creating a space for diverse voices. The event features ambient music, atmospheric decorations, and Vietnamese tea service that enhances the immersive artistic experience."
                .to_string(),
            popular_activities: vec![
                "Bilingual poetry readings".to_string(),
                "Open mic session".to_string(),
                "Community bonding".to_string(),
                "Literary discussions".to_string(),
            ],
        },
        Event {
            id: "6".to_string(),
            title: "Game Night".to_string(),
            image: "/static/images/game.png".to_string(),
            year: "2024".to_string(),
            location: "Hamilton 309".to_string(),
            summary: "Join the Vietnamese Student Association for an exciting Game Night filled with fun, laughter, and friendly competition! Experience a diverse selection of games including traditional Vietnamese games like Ô ăn quan and Cờ tướng (Vietnamese chess), alongside popular board games and video game tournaments. Our game stations cater to both competitive players and those seeking casual entertainment in a social setting. Throughout the night, enjoy Vietnamese snacks and refreshments that fuel the gaming experience while creating a festive atmosphere for making new friends."
                .to_string(),
            popular_activities: vec![
                "Traditional Vietnamese games".to_string(),
                "Board game competitions".to_string(),
                "Game".to_string(),
                "Snack bar".to_string(),
            ],
        },
        Event {
            id: "7".to_string(),
            title: "Field Day".to_string(),
            image: "/static/images/field.png".to_string(),
            year: "2024".to_string(),
            location: "Riverside Park".to_string(),
            summary: "Join the Vietnamese Student Association for our action-packed Field Day event! Participate in a variety of outdoor activities and sports including Vietnamese shuttlecock kicking (đá cầu), relay races, tug-of-war, and volleyball matches designed for all skill levels. Our event promotes physical activity, teamwork, and healthy competition in a welcoming environment. Participants can enjoy refreshing Vietnamese beverages like sugarcane juice and coconut water to stay hydrated throughout the day of outdoor fun and community building."
                .to_string(),
            popular_activities: vec![
                "Đá cầu (shuttlecock kicking)".to_string(),
                "Relay races".to_string(),
                "Volleyball matches".to_string(),
                "Games".to_string(),
                "Community bonding".to_string(),
            ],
        },
        Event {
            id: "8".to_string(),
            title: "Night Market".to_string(),
            image: "/static/images/market.png".to_string(),
            year: "2023".to_string(),
            location: "Low Plaza".to_string(),
            summary: "Experience the vibrant sights, sounds, and flavors of Vietnam at the VSA Night Market! Our indoor market recreates the bustling atmosphere of Vietnamese night markets with colorful lanterns, aromatic food stalls, and lively music. Explore vendor booths featuring student entrepreneurs selling crafts, art, and goods inspired by Vietnamese culture. Sample a diverse selection of authentic Vietnamese street foods prepared by VSA members and local restaurants. Cultural demonstrations throughout the evening showcase traditional crafts and performing arts for an immersive experience."
                .to_string(),
            popular_activities: vec![
                "Street food sampling".to_string(),
                "Tasting".to_string(),
                "Vendor shopping".to_string(),
                "Lantern making".to_string(),
            ],
        },
        Event {
            id: "9".to_string(),
            title: "ACE Reveal Party".to_string(),
            image: "/static/images/mixer.jpg".to_string(),
            year: "2023".to_string(),
            location: "East Campus".to_string(),
            summary: "Join us for the highly anticipated Anh Chi Em (ACE) Family Reveal Party hosted by the Vietnamese Student Association! This special ceremony pairs new VSA members with upperclassmen mentors in our unique family system that provides guidance, friendship, and support throughout the academic year. Experience the excitement as new members discover their ACE families through creative and surprising reveal activities designed to create meaningful connections. The celebration features team-building games, a shared Vietnamese meal, and family photo sessions to commemorate the beginning of these important relationships."
                .to_string(),
            popular_activities: vec![
                "Family reveal ceremony".to_string(),
                "Games".to_string(),
                "Photo booth".to_string(),
                "Vietnamese banquet".to_string(),
                "Community bonding".to_string(),
            ],
        },
        Event {
            id: "10".to_string(),
            title: "Mid Autumn Festival".to_string(),
            image: "/static/images/picnic.png".to_string(),
            year: "2023".to_string(),
            location: "Math Lawn".to_string(),
            summary: "Join us for the Vietnamese Student Association's Mid-Autumn Festival! Celebrate this important cultural holiday with traditional performances, lantern making, and mooncake tasting. Learn about the mythology and significance behind this harvest festival through interactive displays and storytelling sessions. Children from local Vietnamese-American families will perform traditional dances and songs, creating an authentic community celebration. Participants will create their own paper lanterns, enjoy tea ceremonies, and sample various types of mooncakes in this family-friendly cultural event."
                .to_string(),
            popular_activities: vec![
                "Lantern making".to_string(),
                "Mooncake tasting".to_string(),
                "Traditional performances".to_string(),
                "Community bonding".to_string(),
            ],
        },
        Event {
            id: "11".to_string(),
            title: "Che Social".to_string(),
            image: "/static/images/che.jpg".to_string(),
            year: "2025".to_string(),
            location: "Lerner East Ramp Lounge".to_string(),
            summary: "Join the Vietnamese Student Association for our Chè Social, a cultural gathering celebrating Vietnam's sweet treats! Enjoy two classic desserts: chè Thai, a tropical blend of fruits, jellies, and coconut milk, and chè ba màu (three-color dessert) with sweet beans, jellies, and coconut cream. This casual event offers more than just delicious desserts—it's a chance to connect with fellow VSA members, learn about the cultural significance of these sweets, and enjoy relaxed conversation. Whether you're a fan of Vietnamese desserts or trying chè for the first time, this event is a sweet way to experience Vietnamese culinary culture!"
                .to_string(),
            popular_activities: vec![
                "Tasting".to_string(),
                "Cultural discussions".to_string(),
                "Community bonding".to_string(),
                "Dessert demonstrations".to_string(),
            ],
        },
        Event {
            id: "12".to_string(),
            title: "Food Panel with Bánh by Lauren".to_string(),
            image: "/static/images/banh.jpg".to_string(),
            year: "2025".to_string(),
            location: "Hamilton 602".to_string(),
            summary: "Join the Vietnamese Student Association for our exclusive Food Panel featuring \"Bánh by Lauren\"! Meet Lauren, the owner of the Vietnamese-inspired bakery, and learn about her journey, inspirations, challenges, and the cultural influences behind her creations during a Q&A session. The evening will also feature a tasting of Lauren's signature desserts, offering a modern twist on traditional Vietnamese bánh. Whether you're passionate about Vietnamese cuisine, food entrepreneurship, or love exceptional desserts, this interactive panel is the perfect blend of cultural exploration and culinary delight. Don't miss this chance to meet a local food creator!"
                .to_string(),
            popular_activities: vec![
                "Q&A with Lauren".to_string(),
                "Tasting".to_string(),
                "Entrepreneurship discussion".to_string(),
                "Dessert demonstrations".to_string(),
            ],
        },
        Event {
            id: "13".to_string(),
            title: "SEA Formal".to_string(),
            image: "/static/images/formal.png".to_string(),
            year: "2025".to_string(),
            location: "Roone Arledge Auditorium".to_string(),
            summary: "Join us for the Southeast Asian Formal, a celebration uniting Vietnamese, Thai, Filipino, Malaysian, Indonesian, and other Southeast Asian student associations. Enjoy exquisite cuisine, traditional and contemporary performances, and dancing into the night. Guests are encouraged to wear formal attire or cultural dress to honor our heritage and community bonds. With photo opportunities, curated music, and a joyful atmosphere, this elegant event is the perfect setting to make new friends and celebrate the beauty of Southeast Asian cultures. Don't miss this unforgettable night of cultural pride and tradition!"
                .to_string(),
            popular_activities: vec![
                "Cultural performances".to_string(),
                "Southeast Asian cuisine".to_string(),
                "Dancing".to_string(),
                "Traditional dress showcase".to_string(),
                "Community bonding".to_string(),
            ],
        },
    ]
}

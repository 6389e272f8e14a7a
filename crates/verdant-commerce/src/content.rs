//! Static page content: reviews, FAQ, contacts, and section anchors.
//!
//! Like the catalog, this is seeded in memory; the presentation layer
//! reads it as-is.

use crate::ids::ReviewId;
use serde::{Deserialize, Serialize};

/// A customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// Reviewer display name.
    pub author: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Review text.
    pub text: String,
}

impl Review {
    pub fn new(id: ReviewId, author: impl Into<String>, rating: u8, text: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            rating: rating.clamp(1, 5),
            text: text.into(),
        }
    }
}

/// The shop's seeded reviews.
pub fn seed_reviews() -> Vec<Review> {
    vec![
        Review::new(
            ReviewId::new(1),
            "Анна К.",
            5,
            "Заказала монстеру — пришла в отличном состоянии! Здоровое растение, красивые листья.",
        ),
        Review::new(
            ReviewId::new(2),
            "Дмитрий М.",
            5,
            "Беру растения только здесь. Всегда свежие, хорошо упакованы. Консультируют по уходу.",
        ),
        Review::new(
            ReviewId::new(3),
            "Мария С.",
            5,
            "Суккуленты прижились отлично! Спасибо за подробную инструкцию по уходу.",
        ),
    ]
}

/// A question-and-answer entry for the FAQ section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqEntry {
    /// The question as shown on the page.
    pub question: String,
    /// The care advice answering it.
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The seeded plant-care FAQ.
pub fn seed_faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "Как часто поливать растения?",
            "Частота полива зависит от вида растения. Большинство комнатных растений нуждаются в поливе 1-2 раза в неделю летом и реже зимой. Проверяйте почву пальцем — если верхний слой (2-3 см) сухой, пора поливать.",
        ),
        FaqEntry::new(
            "Сколько света нужно растениям?",
            "Большинству растений нужен яркий рассеянный свет. Избегайте прямых солнечных лучей — они могут обжечь листья. Теневыносливые растения (сансевиерия, замиокулькас) хорошо растут и в глубине комнаты.",
        ),
        FaqEntry::new(
            "Какая температура оптимальна?",
            "Комнатная температура 18-25°C идеальна для большинства растений. Избегайте сквозняков и резких перепадов температуры. Зимой держите растения подальше от батарей отопления.",
        ),
        FaqEntry::new(
            "Что делать с вредителями?",
            "При появлении вредителей (паутинный клещ, тля) изолируйте растение. Протрите листья мыльным раствором или используйте специальные препараты. Регулярный осмотр помогает выявить проблему на ранней стадии.",
        ),
        FaqEntry::new(
            "Когда пересаживать растение?",
            "Молодые растения пересаживают раз в год весной, взрослые — раз в 2-3 года. Признаки необходимости пересадки: корни выглядывают из дренажных отверстий, земля быстро пересыхает, рост замедлился.",
        ),
    ]
}

/// Shop identity and contact details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreInfo {
    /// Shop name.
    pub name: String,
    /// Footer tagline.
    pub tagline: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "Живой уют".to_string(),
            tagline: "Комнатные растения с любовью".to_string(),
            email: "plants@votetovetsh.ru".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
        }
    }
}

/// Page sections the header navigation can scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Home,
    Catalog,
    About,
    Reviews,
    Faq,
    Checkout,
    Contacts,
}

impl Section {
    /// The anchor ID of the section element.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Catalog => "catalog",
            Section::About => "about",
            Section::Reviews => "reviews",
            Section::Faq => "faq",
            Section::Checkout => "checkout",
            Section::Contacts => "contacts",
        }
    }

    /// Display title for the navigation.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Catalog => "Каталог",
            Section::About => "О нас",
            Section::Reviews => "Отзывы",
            Section::Faq => "Вопросы и ответы",
            Section::Checkout => "Оформление заказа",
            Section::Contacts => "Контакты",
        }
    }

    /// Sections shown in the header navigation, in order.
    pub const NAV: [Section; 5] = [
        Section::Home,
        Section::Catalog,
        Section::About,
        Section::Reviews,
        Section::Contacts,
    ];
}

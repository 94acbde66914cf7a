//! Core data types for flip cards
//!
//! - `Card`: front and back HTML faces
//! - `SavedCard`: a card as read back from storage, faces possibly missing
//! - `Face`: which side of a card
//! - `Locale`: placeholder and label strings
//! - `FaceKind`: classification of a face's markup

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use std::sync::OnceLock;

/// Face content the browser produces when a missing value is interpolated.
const UNDEFINED_FACE: &str = "undefined";

/// One side of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
}

impl Face {
    pub fn all() -> [Face; 2] {
        [Face::Front, Face::Back]
    }

    /// CSS class of the face element
    pub fn class_name(&self) -> &'static str {
        match self {
            Face::Front => "card-front",
            Face::Back => "card-back",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Front => write!(f, "front"),
            Face::Back => write!(f, "back"),
        }
    }
}

/// Language of the placeholder text and control labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Traditional Chinese
    #[default]
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// Text shown on a fresh card's face
    pub fn placeholder_text(&self, face: Face) -> &'static str {
        match (self, face) {
            (Locale::ZhTw, Face::Front) => "點擊編輯正面",
            (Locale::ZhTw, Face::Back) => "點擊編輯背面",
            (Locale::En, Face::Front) => "Click to edit front",
            (Locale::En, Face::Back) => "Click to edit back",
        }
    }

    /// Placeholder markup for a fresh card's face
    pub fn placeholder(&self, face: Face) -> String {
        paragraph(self.placeholder_text(face))
    }

    /// Toggle-control label while in view mode
    pub fn enter_edit_label(&self) -> &'static str {
        match self {
            Locale::ZhTw => "進入編輯模式",
            Locale::En => "Enter edit mode",
        }
    }

    /// Toggle-control label while in edit mode
    pub fn exit_edit_label(&self) -> &'static str {
        match self {
            Locale::ZhTw => "退出編輯模式",
            Locale::En => "Exit edit mode",
        }
    }

    /// Alt text for image faces
    pub fn image_alt(&self) -> &'static str {
        match self {
            Locale::ZhTw => "卡牌圖片",
            Locale::En => "Card image",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::ZhTw => "zh-TW",
            Locale::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown locale: {0} (expected zh-TW or en)")]
pub struct ParseLocaleError(String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh-tw" | "zh" => Ok(Locale::ZhTw),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            _ => Err(ParseLocaleError(s.to_string())),
        }
    }
}

/// Paragraph markup for a text face
pub fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", text)
}

/// Image markup for an image face
pub fn image(src: &str, alt: &str) -> String {
    format!(r#"<img src="{}" alt="{}">"#, src, alt)
}

/// A flashcard with two HTML faces
///
/// Stored cards carry no ID. On screen a card is addressed by its index in
/// the deck, and tracked by the deck's `CardId` while it stays there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// A fresh card showing the "click to edit" placeholders
    pub fn placeholder(locale: Locale) -> Self {
        Self {
            front: locale.placeholder(Face::Front),
            back: locale.placeholder(Face::Back),
        }
    }

    /// Build a card from saved data, or from placeholders when `data` is `None`.
    ///
    /// A face that is missing, `null`, or literally `"undefined"` falls back
    /// to its placeholder.
    pub fn build(data: Option<SavedCard>, locale: Locale) -> Self {
        let Some(data) = data else {
            return Self::placeholder(locale);
        };

        let repair = |content: Option<String>, face: Face| match content {
            Some(html) if html != UNDEFINED_FACE => html,
            _ => locale.placeholder(face),
        };

        Self {
            front: repair(data.front, Face::Front),
            back: repair(data.back, Face::Back),
        }
    }

    pub fn face(&self, face: Face) -> &str {
        match face {
            Face::Front => &self.front,
            Face::Back => &self.back,
        }
    }

    pub fn set_face(&mut self, face: Face, html: impl Into<String>) {
        match face {
            Face::Front => self.front = html.into(),
            Face::Back => self.back = html.into(),
        }
    }
}

/// A card entry as read from storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCard {
    #[serde(default)]
    pub front: Option<String>,
    #[serde(default)]
    pub back: Option<String>,
}

impl SavedCard {
    /// Read one stored entry, tolerating anything that is valid JSON
    ///
    /// An entry that is not an object has no faces. A string face is kept,
    /// a number or boolean face becomes its text, anything else is missing.
    pub fn from_value(value: &Value) -> Self {
        let Some(entry) = value.as_object() else {
            return Self::default();
        };

        Self {
            front: face_text(entry.get("front")),
            back: face_text(entry.get("back")),
        }
    }

    /// Both faces are present and neither needs the undefined guard
    pub fn is_intact(&self) -> bool {
        [&self.front, &self.back]
            .into_iter()
            .all(|face| matches!(face.as_deref(), Some(html) if html != UNDEFINED_FACE))
    }
}

fn face_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(html) => Some(html.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl From<Card> for SavedCard {
    fn from(card: Card) -> Self {
        Self {
            front: Some(card.front),
            back: Some(card.back),
        }
    }
}

/// What a face's markup holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceKind {
    /// A single paragraph of text
    Text(String),
    /// An image tag; `src` is usually a data URL
    Image { src: String },
    /// Anything else, kept verbatim
    Markup(String),
}

fn paragraph_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)^\s*<p>(.*?)</p>\s*$").expect("valid paragraph regex"))
}

fn image_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?s)^\s*<img\s+[^>]*?src="([^"]*)"[^>]*>\s*$"#).expect("valid image regex")
    })
}

impl FaceKind {
    pub fn classify(html: &str) -> Self {
        if let Some(caps) = image_pattern().captures(html) {
            return FaceKind::Image {
                src: caps[1].to_string(),
            };
        }
        match paragraph_pattern().captures(html) {
            Some(caps) if !caps[1].contains("<p>") => FaceKind::Text(caps[1].to_string()),
            _ => FaceKind::Markup(html.to_string()),
        }
    }

    /// One-line description for listings
    pub fn summary(&self, max_chars: usize) -> String {
        match self {
            FaceKind::Text(text) => truncate(text, max_chars),
            FaceKind::Image { src } => {
                let mime = src
                    .strip_prefix("data:")
                    .and_then(|rest| rest.split(';').next())
                    .filter(|m| !m.is_empty())
                    .unwrap_or("external");
                format!("[image {}, {} bytes]", mime, src.len())
            }
            FaceKind::Markup(html) => format!("[html] {}", truncate(html, max_chars)),
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

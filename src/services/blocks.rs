// src/services/blocks.rs

//! Slack Block Kit message assembly.
//!
//! Builds the block sequence for one run: a header, then each source
//! bracketed by dividers, then one section per menu item.

use serde::Serialize;

use crate::models::MenuSource;

/// A Block Kit text object.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    PlainText { text: String },
    Mrkdwn { text: String },
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }
}

/// A section accessory: link button or thumbnail image.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Accessory {
    Button { text: Text, url: String },
    Image { image_url: String, alt_text: String },
}

/// One atomic unit of the outbound message.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header {
        text: Text,
    },
    Divider,
    Section {
        text: Text,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<Accessory>,
    },
}

impl Block {
    fn header(text: impl Into<String>) -> Self {
        Self::Header {
            text: Text::plain(text),
        }
    }

    fn section(text: impl Into<String>, accessory: Option<Accessory>) -> Self {
        Self::Section {
            text: Text::mrkdwn(text),
            accessory,
        }
    }
}

/// Assemble the full block sequence for the given sources.
///
/// No truncation: long menus produce proportionally long messages.
pub fn build_blocks(sources: &[MenuSource], heading: &str) -> Vec<Block> {
    let mut blocks = vec![Block::header(heading)];

    for source in sources {
        blocks.push(Block::Divider);
        blocks.push(Block::section(
            format!("*{}*", source.title),
            Some(Accessory::Button {
                text: Text::plain("홈페이지에서 확인"),
                url: source.url.clone(),
            }),
        ));
        blocks.push(Block::Divider);

        for item in &source.items {
            let accessory = item.image_url.as_ref().map(|image_url| Accessory::Image {
                image_url: image_url.clone(),
                alt_text: item.name.clone(),
            });
            blocks.push(Block::section(
                format!("*{}*\n가격: {}", item.name, item.price),
                accessory,
            ));
            blocks.push(Block::Divider);
        }
    }
    blocks
}

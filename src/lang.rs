//! Language tags and the per-language string tables.
//!
//! Every user-visible string and every prompt lives here so the rest of the
//! crate only ever deals in `Language` values.

use std::fmt;
use std::str::FromStr;

/// Content language. The app starts in Chinese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Zh,
    En,
}

/// Static UI chrome for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    pub title: &'static str,
    /// Label of history index 0. Also the topic that maps back to the
    /// welcome entry when navigated to.
    pub root_breadcrumb: &'static str,
    pub footer: &'static str,
    /// Label on the toggle button (names the *other* language).
    pub lang_toggle: &'static str,
}

const ZH_TEXT: UiText = UiText {
    title: "无限维基",
    root_breadcrumb: "无限",
    footer: "每一次点击，都生成一个新的现实。",
    lang_toggle: "EN",
};

const EN_TEXT: UiText = UiText {
    title: "INFINITY WIKI",
    root_breadcrumb: "Infinity",
    footer: "A new reality generated with every click.",
    lang_toggle: "中文",
};

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }

    pub fn ui_text(self) -> &'static UiText {
        match self {
            Language::Zh => &ZH_TEXT,
            Language::En => &EN_TEXT,
        }
    }

    pub fn root_label(self) -> &'static str {
        self.ui_text().root_breadcrumb
    }

    /// Prompt for the welcome paragraph shown at the root of the history.
    pub fn initial_prompt(self) -> String {
        match self {
            Language::Zh => String::from(
                "你就是“无限维基”。请用中文生成初始欢迎信息。它必须是一个简短、神秘的段落，\
                 介绍一个可以无限探索的维基概念，其中每个汉字都是通往新知识的门户。\
                 风格应极简而深刻。文本以“此为无限维基。”开始，并保持在50个汉字以内。\
                 请只返回纯文本，不要包含任何Markdown格式或特殊标记。",
            ),
            Language::En => String::from(
                "You are the 'Infinity Wiki'. Generate the initial welcome message in English. \
                 It must be a single, short, mysterious paragraph introducing the concept of an \
                 endlessly explorable wiki where every word is a gateway to new knowledge. \
                 The style should be minimal and profound. Start the text with \
                 'This is the Infinity Wiki.' and keep it under 25 words.",
            ),
        }
    }

    /// Prompt for an entry about `topic`. The model is told not to echo it.
    pub fn topic_prompt(self, topic: &str) -> String {
        match self {
            Language::Zh => format!(
                "你是一个不断扩展、充满哲思且引人入胜的信息来源——“无限维基”。\
                 你的风格极简、深刻，略带神秘。请用中文围绕概念“{topic}”生成一段新的维基词条。\
                 请不要在回应中重复“{topic}”这个词。内容需要比之前更丰富一些，\
                 大约在70-100个汉字之间，旨在唤起一种奇妙深邃的感觉。\
                 请只返回纯文本，不要包含任何Markdown格式或特殊标记。"
            ),
            Language::En => format!(
                "You are 'Infinity Wiki', a source of ever-expanding, concise, and fascinating \
                 information. Your style is minimalist, profound, and slightly mysterious. \
                 Generate a new, short (under 25 words), single-paragraph wiki entry in English \
                 about the concept of: '{topic}'. Do not repeat the topic in your response. \
                 The entry should evoke a sense of wonder."
            ),
        }
    }

    /// Shown in place of the welcome paragraph when generation fails.
    pub fn initial_error_text(self) -> String {
        match self {
            Language::Zh => String::from(
                "错误：无法连接到生成意识。每个开始都蕴含着潜在的错误，一条未被选择的道路。点击重试。",
            ),
            Language::En => String::from(
                "Error: Could not connect to the generative consciousness. Every beginning holds \
                 a potential error, a path not taken. Click to retry.",
            ),
        }
    }

    /// Shown in place of a topic entry when generation fails.
    pub fn topic_error_text(self, topic: &str) -> String {
        match self {
            Language::Zh => {
                format!("错误：关于“{topic}”的概念似乎已从存在的裂缝中溜走。或许，试试另一个字。")
            }
            Language::En => format!(
                "Error: The concept of \"{topic}\" seems to have slipped through a crack in \
                 existence. Perhaps, try another word."
            ),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unknown language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError {
    pub input: String,
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language '{}' (expected 'zh' or 'en')", self.input)
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" => Ok(Language::Zh),
            "en" => Ok(Language::En),
            _ => Err(ParseLanguageError {
                input: s.to_string(),
            }),
        }
    }
}

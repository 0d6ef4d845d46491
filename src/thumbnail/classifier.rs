// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Rule-based request classifier for the thumbnail assistant
//!
//! Decides whether a chat message is in scope and whether it is an explicit
//! request to generate a thumbnail. Scope detection is deliberately
//! permissive: any single heuristic match is enough.

use regex::{Regex, RegexSet};
use serde::{Deserialize, Serialize};

/// Greetings and basic interactions that are always allowed
const ALLOWED_GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "how are you",
    "thanks",
    "thank you",
    "bye",
    "goodbye",
    "see you",
    "start",
    "begin",
    "help",
    "what can you do",
    "capabilities",
    "features",
];

/// Domain keywords matched as substrings of the normalized message
const DOMAIN_KEYWORDS: &[&str] = &[
    "thumbnail",
    "youtube",
    "video",
    "title",
    "design",
    "background",
    "text",
    "font",
    "color",
    "layout",
    "composition",
    "branding",
    "logo",
    "image",
    "photo",
    "picture",
    "visual",
    "graphic",
    "art",
    "creative",
    "style",
    "theme",
    "mood",
    "tone",
    "audience",
    "engagement",
    "click",
    "view",
    "trending",
    "popular",
    "viral",
    "content",
    "creator",
    "channel",
    "upload",
    "publish",
    "social media",
    "instagram",
    "tiktok",
    "facebook",
    "twitter",
    "linkedin",
    "platform",
    "ai",
    "generation",
    "create",
    "make",
    "build",
    "produce",
    "develop",
    "tech",
    "lifestyle",
    "education",
    "gaming",
    "entertainment",
    "news",
    "tutorial",
    "review",
    "vlog",
    "podcast",
    "stream",
    "live",
    "broadcast",
    "thumb",
    "running",
    "person",
    "road",
    "work",
    "hard",
];

/// Case-insensitive patterns for misspellings and thumbnail phrasing
const SCOPE_PATTERNS: &[&str] = &[
    r"(?i)thumbnail",
    r"(?i)thumbanil",
    r"(?i)youtube",
    r"(?i)video.*title",
    r"(?i)design.*image",
    r"(?i)create.*(image|thumbnail|thumb)",
    r"(?i)generate.*(image|thumbnail|thumb)",
    r"(?i)ai.*image",
    r"(?i)content.*strategy",
    r"(?i)visual.*design",
    r"(?i)graphic.*design",
    r"(?i)help.*me",
    r"(?i)can.*you.*help",
    r"(?i)what.*should.*i.*do",
    r"(?i)how.*do.*i",
    r"(?i)tips.*for",
    r"(?i)advice.*on",
    r"(?i)create.*thumb",
    r"(?i)make.*thumb",
    r"(?i)build.*thumb",
    r"(?i)personal.*thumb",
    r"(?i)thumb.*where",
    r"(?i)create.*this",
];

const QUESTION_PREFIX: &str =
    r"(?i)^(what|how|why|when|where|which|can|could|would|should|do|does|is|are|will)";

const HELP_WORDS: &str = r"(?i)help|assist|support|guide|advice|suggest|recommend";

const CREATION_VERBS: &[&str] = &["create", "make", "generate", "build", "design"];

const CREATION_SUBJECTS: &[&str] = &["thumbnail", "thumbanil", "thumb", "image"];

/// Outcome of classifying one user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// The message belongs to the assistant's domain
    pub in_scope: bool,
    /// The message asks for a thumbnail to be generated now
    pub is_creation_intent: bool,
}

/// Classifier holding the compiled scope patterns
#[derive(Debug, Clone)]
pub struct RequestClassifier {
    scope_patterns: RegexSet,
    question_prefix: Regex,
    help_words: Regex,
}

impl RequestClassifier {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            scope_patterns: RegexSet::new(SCOPE_PATTERNS)?,
            question_prefix: Regex::new(QUESTION_PREFIX)?,
            help_words: Regex::new(HELP_WORDS)?,
        })
    }

    /// Classify a user message. Never fails; empty input is out of scope.
    pub fn classify(&self, message: &str) -> ClassificationResult {
        ClassificationResult {
            in_scope: self.is_in_scope(message),
            is_creation_intent: is_creation_intent(message),
        }
    }

    /// True if any scope heuristic matches
    pub fn is_in_scope(&self, message: &str) -> bool {
        let lower = message.trim().to_lowercase();

        let is_greeting = ALLOWED_GREETINGS
            .iter()
            .any(|greeting| lower.contains(greeting) || lower == *greeting);
        if is_greeting {
            return true;
        }

        let has_keyword = DOMAIN_KEYWORDS
            .iter()
            .any(|keyword| lower.contains(keyword));
        let has_pattern = self.scope_patterns.is_match(message);
        let is_question = self.question_prefix.is_match(&lower);
        let is_help_request = self.help_words.is_match(&lower);
        let has_create_thumb = lower.contains("create") && lower.contains("thumb");

        has_keyword || has_pattern || is_question || is_help_request || has_create_thumb
    }
}

/// True if the message pairs a creation verb with a thumbnail/image noun
pub fn is_creation_intent(message: &str) -> bool {
    let lower = message.trim().to_lowercase();
    let has_verb = CREATION_VERBS.iter().any(|verb| lower.contains(verb));
    let has_subject = CREATION_SUBJECTS
        .iter()
        .any(|subject| lower.contains(subject));
    has_verb && has_subject
}

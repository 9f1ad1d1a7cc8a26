// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::cmp::Reverse;

use super::selection::ServiceSelection;
use crate::catalog::{SERVICES, find_service};

const MESSAGE_OPENING: &str = "Hi, I'm interested in your";
const MESSAGE_CLOSING: &str = "I'd love to learn more about how you can help my business.";
const ADDITIONAL_NOTES_LABEL: &str = "Additional notes:";

/// Words that never count towards "meaningful" leftover text when rearranging.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "need", "needs", "help", "want", "wants", "would", "like",
    "looking", "our", "your", "you", "are", "can", "this", "that", "have", "has", "but", "not",
    "also", "about", "from", "into", "just", "some", "any", "get", "all", "its", "it's", "i'm",
    "was", "will", "who", "how", "what", "more", "much", "very", "please", "hello", "hey",
    "thanks", "thank", "interested", "business", "company", "service", "services",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionOutcome {
    pub added: Vec<&'static str>,
    pub removed: Vec<&'static str>,
}

impl DetectionOutcome {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Brings catalog services in `selection` in line with the keywords found in `message`.
///
/// Services outside the catalog are left alone.
pub fn detect_services(message: &str, selection: &mut ServiceSelection) -> DetectionOutcome {
    let lowered = message.to_lowercase();
    let mut outcome = DetectionOutcome::default();

    for service in SERVICES {
        let mentioned = service.matches(&lowered);
        let selected = selection.contains(service.name);
        if mentioned && !selected {
            selection.insert(service.name);
            outcome.added.push(service.name);
        } else if !mentioned && selected {
            selection.remove(service.name);
            outcome.removed.push(service.name);
        }
    }

    outcome
}

pub fn generate_service_message<S: AsRef<str>>(services: &[S]) -> String {
    match services {
        [] => String::new(),
        [only] => format!(
            "{} {} service. {}",
            MESSAGE_OPENING,
            only.as_ref(),
            MESSAGE_CLOSING
        ),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{} {} and {} services. {}",
                MESSAGE_OPENING,
                head,
                last.as_ref(),
                MESSAGE_CLOSING
            )
        }
    }
}

/// Rewrites `message` as the generated service sentence, keeping whatever the
/// user wrote beyond the service keywords as trailing notes.
pub fn enhance_message<S: AsRef<str>>(message: &str, services: &[S]) -> String {
    let generated = generate_service_message(services);
    let mut remainder = message.to_lowercase();

    // Longest phrases first across all services, so "facebook ads" goes
    // before "facebook".
    let mut keywords: Vec<&str> = services
        .iter()
        .filter_map(|name| find_service(name.as_ref()))
        .flat_map(|service| service.keywords.iter().copied())
        .collect();
    keywords.sort_by_key(|keyword| Reverse(keyword.len()));
    for keyword in keywords {
        remainder = remainder.replace(keyword, " ");
    }

    let remainder = collapse_text(&remainder);
    let meaningful = remainder
        .split(' ')
        .filter(|word| is_meaningful(word))
        .count();

    if meaningful > 2 {
        format!("{}\n\n{} {}", generated, ADDITIONAL_NOTES_LABEL, remainder)
    } else {
        generated
    }
}

fn collapse_text(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '\'' {
                ch
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_meaningful(word: &str) -> bool {
    word.chars().count() > 2 && !STOPWORDS.contains(&word)
}

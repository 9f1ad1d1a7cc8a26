// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! The agency's service offering, shared by the service-tag session and the
//! `/api/services` endpoint.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ServiceDefinition {
    pub name: &'static str,
    pub description: &'static str,
    /// Lowercase substrings that imply interest in this service.
    pub keywords: &'static [&'static str],
}

impl ServiceDefinition {
    pub fn matches(&self, lowercase_text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowercase_text.contains(keyword))
    }
}

// Keyword lists are hand-tuned; matching is plain substring search.
pub const SERVICES: &[ServiceDefinition] = &[
    ServiceDefinition {
        name: "Social Media Marketing",
        description: "Strategic content creation and community management that builds authentic connections with your audience.",
        keywords: &[
            "social media",
            "instagram",
            "facebook",
            "linkedin",
            "twitter",
            "content marketing",
            "posts",
            "engagement",
            "followers",
            "smm",
        ],
    },
    ServiceDefinition {
        name: "Meta Ads & Paid Ads",
        description: "Data-driven advertising campaigns on Meta, Google, and beyond that maximize your ROI.",
        keywords: &[
            "meta ads",
            "paid ads",
            "advertising",
            "ppc",
            "google ads",
            "facebook ads",
            "campaigns",
            "roi",
        ],
    },
    ServiceDefinition {
        name: "Product Design",
        description: "User-centric design solutions that transform complex ideas into intuitive digital experiences.",
        keywords: &[
            "product design",
            "ui design",
            "ux design",
            "user interface",
            "user experience",
            "prototype",
            "mockup",
            "figma",
        ],
    },
    ServiceDefinition {
        name: "Branding",
        description: "Comprehensive brand identity development that captures your essence and resonates with your market.",
        keywords: &[
            "brand",
            "branding",
            "logo",
            "brand identity",
            "rebrand",
            "visual identity",
        ],
    },
    ServiceDefinition {
        name: "Website Development",
        description: "Modern, responsive websites built with cutting-edge technology for optimal performance.",
        keywords: &[
            "website",
            "web development",
            "landing page",
            "frontend",
            "backend",
            "react",
            "web app",
        ],
    },
    ServiceDefinition {
        name: "Automation & AI Agents",
        description: "Intelligent automation solutions and AI-powered tools that streamline your operations.",
        keywords: &[
            "automation",
            "ai agent",
            "artificial intelligence",
            "chatbot",
            "automate",
            "machine learning",
        ],
    },
];

pub fn find_service(name: &str) -> Option<&'static ServiceDefinition> {
    SERVICES.iter().find(|service| service.name == name)
}

// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Visitor-side state of the contact section: service tags synchronized with
//! the message text, and the form that submits it.

mod compose;
mod contact_form;
mod debounce;
mod gateway;
mod history;
mod selection;
mod session;

pub use compose::{DetectionOutcome, detect_services, enhance_message, generate_service_message};
pub use contact_form::{ContactFormState, NoticeVariant, Notifier};
pub use debounce::{DEFAULT_DETECTION_DELAY, DebouncedSession};
pub use gateway::{ContactGateway, HttpContactGateway, SUBMIT_CONTACT_FORM_PATH};
pub use history::MessageHistory;
pub use selection::ServiceSelection;
pub use session::{EditOutcome, ServiceSession};

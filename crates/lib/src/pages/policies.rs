use super::{some, strings, text, ContactView};
use crate::{
    coalesce::resolve,
    documents::{PoliciesPage, PolicyGroup, Seo},
};
use serde::Serialize;

pub const META_DESCRIPTION: &str =
    "Review our booking, cancellation, and session policies for Kizmet Massage & Wellness.";

fn group(title: &str, items: &[&str]) -> PolicyGroup {
    PolicyGroup {
        title: title.to_string(),
        items: strings(items),
    }
}

pub fn fallback_policies() -> Vec<PolicyGroup> {
    vec![
        group(
            "Appointment Policy",
            &[
                "Please arrive 5 minutes early for your appointment. If you're a new client, please come 10-15 minutes early to fill out new client paperwork.",
                "I recommend avoiding heavy meals and caffeine before your massage for the most comfortable experience.",
                "Please communicate any health conditions, injuries, or areas of concern with your therapist before your session begins.",
            ],
        ),
        group(
            "Cancellation Policy",
            &[
                "We require at least 24 hours notice for cancellations or rescheduling. This allows us to offer the time slot to other clients who may be waiting.",
                "Cancellations made less than 24 hours in advance will be subject to a fee equal to 50% of the scheduled service.",
                "No-shows without any prior communication will be charged the full service amount.",
                "We understand emergencies happen. Please contact us as soon as possible if you need to cancel.",
            ],
        ),
        group(
            "Late Arrival Policy",
            &[
                "If you arrive late for your appointment, your session may be shortened to accommodate the next client.",
                "You will still be charged the full price for your originally scheduled service.",
                "If you are running more than 15 minutes late, please call us. We may need to reschedule your appointment.",
            ],
        ),
        group(
            "Payment Policy",
            &[
                "Payment is due at the time of service. We accept cash, credit cards (Visa, MasterCard, American Express), and select mobile payment options.",
                "Gift certificates are available for purchase and make wonderful presents for loved ones.",
                "Gratuity is not included in service prices and is greatly appreciated when you feel your therapist has exceeded expectations.",
            ],
        ),
        group(
            "Health & Safety",
            &[
                "Please reschedule your appointment if you are experiencing cold or flu symptoms, fever, or any contagious condition.",
                "Certain medical conditions may require physician clearance before receiving massage therapy. Please inform us of any health concerns.",
                "All linens and equipment are sanitized between clients. Your health and safety is our top priority.",
            ],
        ),
        group(
            "Draping Policy",
            &[
                "Professional draping is used during all massage sessions to ensure your comfort and privacy.",
                "Only the area being worked on will be exposed. You may undress to your comfort level.",
                "Please communicate with your therapist if you have any concerns about draping or coverage.",
            ],
        ),
    ]
}

pub fn fallback() -> PoliciesPage {
    PoliciesPage {
        eyebrow: some("Important Information"),
        page_title: some("Policies"),
        page_description: some(
            "I appreciate your understanding and cooperation with these policies. They help me provide the best possible experience for all clients.",
        ),
        policies: Some(fallback_policies()),
        questions_heading: some("Questions?"),
        questions_description: some(
            "If you have any questions about our policies or need to discuss special circumstances, please don't hesitate to reach out.",
        ),
        seo: None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoliciesView {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    pub policies: Vec<PolicyGroup>,
    pub questions_heading: String,
    pub questions_description: String,
    pub contact: ContactView,
    pub seo: Option<Seo>,
}

impl PoliciesView {
    pub fn resolve(policies: Option<PoliciesPage>, contact: ContactView) -> Self {
        let page = resolve(policies, fallback());
        Self {
            eyebrow: text(page.eyebrow),
            title: text(page.page_title),
            description: text(page.page_description),
            policies: page.policies.unwrap_or_default(),
            questions_heading: text(page.questions_heading),
            questions_description: text(page.questions_description),
            contact,
            seo: page.seo,
        }
    }
}

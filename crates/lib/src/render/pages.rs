//! Page bodies. Each function renders the `<main>` content of one page.

use super::escape;
use crate::{
    documents::Service,
    pages::{
        book::BookingWidget, AboutView, BookView, ContactView, HomeView, NotFoundView,
        PoliciesView, ServicesView,
    },
};

fn button(text: &str, link: &str, class: &str) -> String {
    format!(
        "<a class=\"button {class}\" href=\"{}\">{}</a>",
        escape(link),
        escape(text)
    )
}

fn header(eyebrow: &str, title: &str, description: &str) -> String {
    format!(
        "<section class=\"page-header\">\n<p class=\"eyebrow\">{}</p>\n<h1>{}</h1>\n<p>{}</p>\n</section>\n",
        escape(eyebrow),
        escape(title),
        escape(description)
    )
}

fn optional(tag: &str, class: &str, value: Option<&str>) -> String {
    match value.filter(|value| !value.trim().is_empty()) {
        Some(value) => format!("<{tag} class=\"{class}\">{}</{tag}>", escape(value)),
        None => String::new(),
    }
}

fn list(items: &[String], class: &str) -> String {
    if items.is_empty() {
        return String::new();
    }
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!("<ul class=\"{class}\">{items}</ul>")
}

fn service_card(service: &Service, book_text: Option<&str>) -> String {
    let mut card = format!(
        "<article class=\"service\">\n<h3>{}</h3>\n{}{}\n{}\n",
        escape(&service.name),
        optional("span", "duration", service.duration.as_deref()),
        optional("span", "price", service.price.as_deref()),
        optional("p", "description", service.description.as_deref()),
    );
    card.push_str(&optional(
        "p",
        "extended-description",
        service.extended_description.as_deref(),
    ));
    card.push_str(&list(&service.techniques, "techniques"));
    card.push_str(&list(&service.best_for, "best-for"));
    if let Some(text) = book_text {
        let link = service
            .booking_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or("/book");
        card.push_str(&button(text, link, "book"));
    } else if let Some(url) = service
        .booking_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
    {
        card.push_str(&button("Book", url, "book"));
    }
    card.push_str("\n</article>\n");
    card
}

fn contact_line(contact: &ContactView) -> String {
    format!(
        "<p class=\"contact\"><a href=\"mailto:{email}\">{email}</a> &bull; <a href=\"{href}\">{phone}</a></p>\n",
        email = escape(&contact.email),
        href = escape(&contact.phone_href),
        phone = escape(&contact.phone)
    )
}

pub fn home(view: &HomeView) -> String {
    let hero = &view.hero;
    let mut html = format!(
        "<section class=\"hero\" style=\"background-image: url('{}')\">\n<h1>{}</h1>\n<p>{}</p>\n{} {}\n</section>\n",
        escape(&hero.image_url),
        escape(&hero.headline),
        escape(&hero.subheadline),
        button(&hero.cta_text, &hero.cta_link, "primary"),
        button(&hero.secondary_cta_text, &hero.secondary_cta_link, "secondary"),
    );

    html.push_str(&format!(
        "<section class=\"services-preview\">\n<h2>{}</h2>\n<p>{}</p>\n",
        escape(&view.services_heading),
        escape(&view.services_description)
    ));
    for service in &view.services {
        html.push_str(&service_card(service, None));
    }
    html.push_str("</section>\n");

    let about = &view.about_preview;
    let image = match &about.image_url {
        Some(url) => format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape(url),
            escape(&about.attribution_name)
        ),
        None => "<div class=\"image-placeholder\"></div>".to_string(),
    };
    html.push_str(&format!(
        "<section class=\"about-preview\">\n{image}\n<p class=\"eyebrow\">{}</p>\n<blockquote>{}</blockquote>\n<p class=\"attribution\">{}, {}</p>\n{}\n</section>\n",
        escape(&about.eyebrow),
        escape(&about.quote),
        escape(&about.attribution_name),
        escape(&about.attribution_title),
        button(&about.cta_text, &about.cta_link, "secondary"),
    ));

    if let Some(testimonials) = &view.testimonials {
        html.push_str(&format!(
            "<section class=\"testimonials\">\n<p class=\"eyebrow\">{}</p>\n<h2>{}</h2>\n<p>{}</p>\n",
            escape(&testimonials.eyebrow),
            escape(&testimonials.title),
            escape(&testimonials.subtitle)
        ));
        for item in &testimonials.items {
            html.push_str(&format!(
                "<figure class=\"testimonial\"><span class=\"initials\">{}</span><blockquote>{}</blockquote><figcaption>{}{}</figcaption></figure>\n",
                escape(&item.initials),
                escape(&item.quote),
                escape(&item.author_name),
                optional("span", "location", item.author_location.as_deref()),
            ));
        }
        html.push_str("</section>\n");
    }

    let cta = &view.cta;
    html.push_str(&format!(
        "<section class=\"cta\">\n<h2>{}</h2>\n<p>{}</p>\n{}\n</section>\n",
        escape(&cta.headline),
        escape(&cta.description),
        button(&cta.button_text, &cta.button_link, "primary"),
    ));
    html
}

pub fn about(view: &AboutView) -> String {
    let mut html = header(&view.eyebrow, &view.headline, &view.intro);
    if let Some(url) = &view.image_url {
        html.push_str(&format!(
            "<img class=\"portrait\" src=\"{}\" alt=\"{}\">\n",
            escape(url),
            escape(&view.quote_attribution)
        ));
    }
    html.push_str(&format!(
        "<section class=\"quote\">\n<blockquote>{}</blockquote>\n<p>{}</p>\n</section>\n",
        escape(&view.quote_text),
        escape(&view.quote_attribution)
    ));

    html.push_str(&format!(
        "<section class=\"bio\">\n<h2>{}</h2>\n{}\n",
        escape(&view.bio_title),
        list(&view.credentials, "credentials")
    ));
    for paragraph in &view.bio_paragraphs {
        html.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
    }
    html.push_str("</section>\n");

    html.push_str(&format!(
        "<section class=\"journey\">\n<h2>{}</h2>\n<p>{}</p>\n<ol>\n",
        escape(&view.journey_title),
        escape(&view.journey_intro)
    ));
    for step in &view.journey_steps {
        html.push_str(&format!(
            "<li><h3>{}</h3><p>{}</p></li>\n",
            escape(&step.title),
            escape(&step.description)
        ));
    }
    html.push_str("</ol>\n</section>\n");

    html.push_str(&format!(
        "<section class=\"cta\">\n<h2>{}</h2>\n{}\n</section>\n",
        escape(&view.cta_headline),
        button(&view.cta_button_text, &view.cta_button_link, "primary")
    ));
    html
}

pub fn services(view: &ServicesView) -> String {
    let mut html = header(&view.eyebrow, &view.title, &view.description);
    html.push_str(&format!(
        "<section class=\"services\">\n<h2>{}</h2>\n",
        escape(&view.section_title)
    ));
    for service in &view.services {
        html.push_str(&service_card(service, Some(view.book_button_text.as_str())));
    }
    html.push_str("</section>\n");
    html.push_str(&format!(
        "<section class=\"cta\">\n<h2>{}</h2>\n<p>{}</p>\n{}\n</section>\n",
        escape(&view.cta_heading),
        escape(&view.cta_description),
        button(&view.cta_button_text, &view.cta_button_link, "primary")
    ));
    html
}

pub fn book(view: &BookView) -> String {
    let mut html = header(&view.eyebrow, &view.headline, &view.description);
    match &view.widget {
        BookingWidget::Embed { cal_link } => {
            html.push_str(&format!(
                "<section class=\"booking\">\n<div id=\"cal-inline\" data-cal-link=\"{}\" data-cal-config='{{\"layout\":\"month_view\",\"theme\":\"light\"}}'></div>\n<script src=\"https://app.cal.com/embed/embed.js\" async></script>\n</section>\n",
                escape(cal_link)
            ));
        }
        BookingWidget::RequestForm {
            service_options,
            time_slots,
        } => {
            html.push_str("<section class=\"booking\">\n<form class=\"booking-form\" method=\"post\">\n");
            html.push_str("<label for=\"name\">Full Name</label><input id=\"name\" name=\"name\" required>\n");
            html.push_str("<label for=\"email\">Email</label><input id=\"email\" name=\"email\" type=\"email\" required>\n");
            html.push_str("<label for=\"phone\">Phone</label><input id=\"phone\" name=\"phone\" type=\"tel\" required>\n");
            html.push_str("<label for=\"service\">Select Service</label><select id=\"service\" name=\"service\">\n<option value=\"\">Choose a service</option>\n");
            for option in service_options {
                html.push_str(&format!(
                    "<option value=\"{option}\">{option}</option>\n",
                    option = escape(option)
                ));
            }
            html.push_str("</select>\n");
            html.push_str("<label for=\"date\">Preferred Date</label><input id=\"date\" name=\"preferredDate\" type=\"date\" required>\n");
            html.push_str("<label for=\"time\">Preferred Time</label><select id=\"time\" name=\"preferredTime\">\n");
            for slot in time_slots {
                html.push_str(&format!("<option value=\"{slot}\">{slot}</option>\n"));
            }
            html.push_str("</select>\n");
            html.push_str("<label for=\"message\">Message</label><textarea id=\"message\" name=\"message\"></textarea>\n");
            html.push_str("<button type=\"submit\">Request Appointment</button>\n</form>\n</section>\n");
        }
    }
    html.push_str(&format!(
        "<section class=\"phone\">\n<p>Prefer to book by phone?</p>\n<a href=\"{}\">{}</a>\n</section>\n",
        escape(&view.contact.phone_href),
        escape(&view.contact.phone)
    ));
    html
}

pub fn policies(view: &PoliciesView) -> String {
    let mut html = header(&view.eyebrow, &view.title, &view.description);
    html.push_str("<section class=\"policies\">\n");
    for (index, policy) in view.policies.iter().enumerate() {
        html.push_str(&format!(
            "<article class=\"policy\">\n<h2><span class=\"number\">{}</span> {}</h2>\n{}\n</article>\n",
            index + 1,
            escape(&policy.title),
            list(&policy.items, "policy-items")
        ));
    }
    html.push_str("</section>\n");
    html.push_str(&format!(
        "<section class=\"questions\">\n<h2>{}</h2>\n<p>{}</p>\n{}</section>\n",
        escape(&view.questions_heading),
        escape(&view.questions_description),
        contact_line(&view.contact)
    ));
    html
}

pub fn not_found(view: &NotFoundView) -> String {
    format!(
        "<section class=\"not-found\">\n<h1>{}</h1>\n<p>{}</p>\n{}\n</section>\n",
        escape(&view.heading),
        escape(&view.message),
        button(&view.button_text, &view.button_link, "primary")
    )
}

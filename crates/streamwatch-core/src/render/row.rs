//! Status card materialization.

use crate::model::{LiveDetails, PresentationRow};

use super::node::Element;

/// Build the card for one row.
///
/// The card is an anchor opening the channel in a new browsing context,
/// holding the logo, a title line with status suffix and badge, then either
/// live details or the status description.
pub fn row_node(row: &PresentationRow) -> Element {
    let logo = Element::new("div")
        .class("logo")
        .child(Element::new("img").attr("src", &row.logo).attr("alt", &row.title));

    let title = Element::new("div")
        .child(Element::new("h3").class("title").text(&row.title))
        .child(
            Element::new("div")
                .class("status")
                .text(row.status_suffix().unwrap_or_default()),
        );

    let badge = Element::new("span")
        .class("badge")
        .class(row.classification.css_class())
        .attr("data-classification", row.classification.badge())
        .text(row.classification.badge());

    let top = Element::new("div")
        .class("top")
        .child(title)
        .child(Element::new("div").child(badge));

    let mut content = Element::new("div").class("content").child(top);
    if let Some(ref live) = row.live {
        content = content
            .child(details_node(live))
            .maybe_child(live.preview.as_deref().map(preview_node));
    } else if let Some(description) = row.description() {
        content = content.child(Element::new("p").class("status-line").text(description));
    }

    Element::new("a")
        .class("stream")
        .attr("role", "button")
        .attr("tabindex", "0")
        .attr("href", &row.link)
        .attr("target", "_blank")
        .attr("rel", "noopener")
        .attr("data-identity", row.identity.as_str())
        .child(logo)
        .child(content)
}

fn details_node(live: &LiveDetails) -> Element {
    Element::new("div")
        .class("details")
        .child(Element::new("div").class("meta").text(format!("Playing: {}", live.game)))
        .child(Element::new("div").class("meta").text(format!("Viewers: {}", live.viewers)))
}

fn preview_node(url: &str) -> Element {
    Element::new("div")
        .class("preview")
        .child(Element::new("img").attr("src", url).attr("alt", "preview"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Classification, Identity};

    fn row(classification: Classification, live: Option<LiveDetails>, status: &str) -> PresentationRow {
        PresentationRow {
            identity: Identity::from("Y"),
            link: "https://www.twitch.tv/Y".into(),
            logo: "logo.png".into(),
            title: "Y Team".into(),
            status: status.into(),
            classification,
            live,
        }
    }

    #[test]
    fn online_card_has_details_and_preview() {
        let live = LiveDetails {
            game: "Chess".into(),
            viewers: 42,
            preview: Some("url".into()),
        };
        let card = row_node(&row(Classification::Online, Some(live), "Live now"));

        let badges = card.find_all_class("badge");
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].text_content(), "ONLINE");
        assert!(badges[0].has_class("online"));

        let meta: Vec<String> = card.find_all_class("meta").iter().map(|m| m.text_content()).collect();
        assert_eq!(meta, ["Playing: Chess", "Viewers: 42"]);
        assert!(card.find_class("preview").is_some());
        assert!(card.find_class("status-line").is_none());
        assert_eq!(card.find_class("status").map(Element::text_content).as_deref(), Some(" — Live now"));
    }

    #[test]
    fn online_card_without_preview_keeps_details() {
        let live = LiveDetails {
            game: String::new(),
            viewers: 0,
            preview: None,
        };
        let card = row_node(&row(Classification::Online, Some(live), ""));
        assert!(card.find_class("details").is_some());
        assert!(card.find_class("preview").is_none());
    }

    #[test]
    fn offline_card_shows_status_line() {
        let card = row_node(&row(Classification::Offline, None, "Back tomorrow"));
        assert!(card.find_class("details").is_none());
        assert_eq!(
            card.find_class("status-line").map(Element::text_content).as_deref(),
            Some("Back tomorrow")
        );
        assert_eq!(card.find_class("badge").map(Element::text_content).as_deref(), Some("OFFLINE"));
    }

    #[test]
    fn card_opens_link_in_new_tab() {
        let card = row_node(&row(Classification::Closed, None, ""));
        assert!(card.has_class("stream"));
        assert_eq!(card.get_attr("href"), Some("https://www.twitch.tv/Y"));
        assert_eq!(card.get_attr("target"), Some("_blank"));
        assert_eq!(card.get_attr("rel"), Some("noopener"));
        assert!(card.find_class("status-line").is_none());
    }
}

//! Discord Message Composition
//!
//! Turns a parsed event into the `{content, embeds}` payload Discord's
//! incoming-webhook API expects.

use serde::Serialize;

use super::event::{EventAction, EventFields, EventKind, EventType};
use crate::config::Locale;

/// Maximum embed description length before truncation.
const MAX_DESCRIPTION_LEN: usize = 1000;

/// Placeholder for embed fields with no value.
const EMPTY_FIELD: &str = "—";

/// Discord incoming-webhook message body.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookMessage {
    pub content: String,
    pub embeds: Vec<Embed>,
}

/// Discord embed object (the subset the bridge uses).
#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub fields: Vec<EmbedField>,
}

/// Inline name/value pair inside an embed.
#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn inline(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline: true,
        }
    }
}

/// Compose the notification for an event.
pub fn compose(event: &EventType, fields: &EventFields, locale: Locale) -> WebhookMessage {
    let noun = fields
        .type_name
        .clone()
        .unwrap_or_else(|| kind_noun(&event.kind, locale).to_string());

    // Deleted or archived targets 404 in HacknPlan, so drop the link.
    let url = if event.action == EventAction::Deleted || fields.archived {
        None
    } else {
        fields.url.clone()
    };

    let mut embed_fields = vec![
        EmbedField::inline(
            "Tipo",
            fields.type_name.clone().unwrap_or_else(|| EMPTY_FIELD.into()),
        ),
        EmbedField::inline(
            "ProjectId",
            fields.project_id.clone().unwrap_or_else(|| EMPTY_FIELD.into()),
        ),
        EmbedField::inline(
            "DesignElementId",
            fields
                .design_element_id
                .clone()
                .unwrap_or_else(|| EMPTY_FIELD.into()),
        ),
        EmbedField::inline(
            match locale {
                Locale::Es => "Evento",
                Locale::En => "Event",
            },
            event.canonical(),
        ),
    ];
    if let Some(parent) = &fields.parent_name {
        embed_fields.push(EmbedField::inline("Parent", parent.clone()));
    }
    if let Some(actor) = &fields.actor {
        embed_fields.push(EmbedField::inline(
            match locale {
                Locale::Es => "Responsable",
                Locale::En => "Actor",
            },
            actor.clone(),
        ));
    }

    let description = fields.description.clone().unwrap_or_else(|| {
        match locale {
            Locale::Es => "Sin descripción.",
            Locale::En => "No description.",
        }
        .to_string()
    });

    WebhookMessage {
        content: content_line(event, fields, &noun, locale),
        embeds: vec![Embed {
            title: fields
                .title
                .clone()
                .unwrap_or_else(|| kind_noun(&event.kind, locale).to_string()),
            description: shorten(&description, MAX_DESCRIPTION_LEN),
            url,
            fields: embed_fields,
        }],
    }
}

/// The single bolded notification line, e.g. `➕ **Nueva Tarea: Fix bug — por ana**`.
fn content_line(event: &EventType, fields: &EventFields, noun: &str, locale: Locale) -> String {
    let raw = if event.raw.is_empty() {
        match locale {
            Locale::Es => "Evento",
            Locale::En => "Event",
        }
    } else {
        event.raw.as_str()
    };

    let mut label = match (&event.action, locale) {
        (EventAction::Created, Locale::Es) => format!("Nuevo {noun}"),
        (EventAction::Updated, Locale::Es) => format!("{noun} actualizado"),
        (EventAction::Deleted, Locale::Es) => format!("{noun} eliminado"),
        (EventAction::Other(_), Locale::Es) => format!("{noun} ({raw})"),
        (EventAction::Created, Locale::En) => format!("New {noun}"),
        (EventAction::Updated, Locale::En) => format!("{noun} updated"),
        (EventAction::Deleted, Locale::En) => format!("{noun} deleted"),
        (EventAction::Other(_), Locale::En) => format!("{noun} ({raw})"),
    };

    if let Some(title) = &fields.title {
        label = format!("{label}: {title}");
    }
    if let Some(actor) = &fields.actor {
        label = match locale {
            Locale::Es => format!("{label} — por {actor}"),
            Locale::En => format!("{label} — by {actor}"),
        };
    }

    format!("{} **{label}**", event.action.emoji())
}

/// Default noun for a kind in the given locale.
fn kind_noun(kind: &EventKind, locale: Locale) -> &'static str {
    match (kind, locale) {
        (EventKind::DesignElement, Locale::Es) => "Elemento de diseño",
        (EventKind::DesignElement, Locale::En) => "Design element",
        (EventKind::WorkItem, Locale::Es) => "Tarea",
        (EventKind::WorkItem, Locale::En) => "Work item",
        (EventKind::Other(_), Locale::Es) => "Evento",
        (EventKind::Other(_), Locale::En) => "Event",
    }
}

/// Truncate to `max` characters, appending an ellipsis when cut.
fn shorten(s: &str, max: usize) -> String {
    let trimmed = s.trim();
    if trimmed.chars().count() <= max {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(max).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn work_item_created() -> (EventType, EventFields) {
        let payload = json!({
            "Name": "Fix bug",
            "Description": "Crash on save",
            "ProjectId": 7,
            "User": {"User": {"Name": "ana"}},
        });
        (
            EventType::parse("workitem.created"),
            EventFields::extract(&payload, None),
        )
    }

    #[test]
    fn created_work_item_spanish() {
        let (event, fields) = work_item_created();
        let message = compose(&event, &fields, Locale::Es);
        assert_eq!(message.content, "➕ **Nuevo Tarea: Fix bug — por ana**");
        assert_eq!(message.embeds[0].title, "Fix bug");
        assert_eq!(message.embeds[0].description, "Crash on save");
    }

    #[test]
    fn created_work_item_english() {
        let (event, fields) = work_item_created();
        let message = compose(&event, &fields, Locale::En);
        assert_eq!(message.content, "➕ **New Work item: Fix bug — by ana**");
    }

    #[test]
    fn canonical_event_field_carries_action() {
        let (event, fields) = work_item_created();
        let message = compose(&event, &fields, Locale::En);
        let field = message.embeds[0]
            .fields
            .iter()
            .find(|f| f.name == "Event")
            .unwrap();
        assert_eq!(field.value, "workitem.created");
    }

    #[test]
    fn type_name_overrides_kind_noun() {
        let payload = json!({"Name": "Combat", "Type": {"Name": "Mechanic"}});
        let event = EventType::parse("designelement.updated");
        let fields = EventFields::extract(&payload, None);
        let message = compose(&event, &fields, Locale::En);
        assert_eq!(message.content, "✏️ **Mechanic updated: Combat**");
    }

    #[test]
    fn deleted_event_drops_link() {
        let payload = json!({"Name": "Old item", "Url": "https://example.com/item"});
        let event = EventType::parse("designelement.deleted");
        let fields = EventFields::extract(&payload, None);
        let message = compose(&event, &fields, Locale::Es);
        assert_eq!(message.content, "🗑️ **Elemento de diseño eliminado: Old item**");
        assert!(message.embeds[0].url.is_none());
    }

    #[test]
    fn archived_event_drops_link() {
        let payload = json!({
            "Name": "Old item",
            "Url": "https://example.com/item",
            "IsArchived": "true",
        });
        let event = EventType::parse("designelement.updated");
        let fields = EventFields::extract(&payload, None);
        let message = compose(&event, &fields, Locale::Es);
        assert!(message.embeds[0].url.is_none());
    }

    #[test]
    fn unknown_event_renders_generic_fallback() {
        let event = EventType::parse("milestone.started");
        let fields = EventFields::default();
        let message = compose(&event, &fields, Locale::En);
        assert_eq!(message.content, "🔔 **Event (milestone.started)**");
    }

    #[test]
    fn missing_fields_render_placeholders() {
        let event = EventType::parse("workitem.updated");
        let fields = EventFields::default();
        let message = compose(&event, &fields, Locale::En);
        let embed = &message.embeds[0];
        assert_eq!(embed.title, "Work item");
        assert_eq!(embed.description, "No description.");
        assert!(embed.fields.iter().any(|f| f.name == "ProjectId" && f.value == "—"));
    }

    #[test]
    fn long_description_is_truncated() {
        let long = "x".repeat(2000);
        assert_eq!(shorten(&long, MAX_DESCRIPTION_LEN).chars().count(), 1001);
        assert!(shorten(&long, MAX_DESCRIPTION_LEN).ends_with('…'));
        assert_eq!(shorten("short", MAX_DESCRIPTION_LEN), "short");
    }
}

//! HacknPlan Event Model
//!
//! Parses the event-type string into a tagged kind/action pair and extracts
//! the human-readable fields out of the notification payload.

use serde_json::Value;

/// Entity kind encoded in the event-type string (e.g. `workitem.created`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Game design model element.
    DesignElement,
    /// Board work item (task).
    WorkItem,
    /// Kind the bridge has no dedicated mapping for.
    Other(String),
}

impl EventKind {
    /// Parse from a lowercased kind token.
    pub fn parse_str(s: &str) -> Self {
        match s {
            "designelement" | "designmodelitem" => Self::DesignElement,
            "workitem" | "task" => Self::WorkItem,
            _ => Self::Other(s.to_string()),
        }
    }

    /// Convert to the canonical token form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::DesignElement => "designelement",
            Self::WorkItem => "workitem",
            Self::Other(raw) => raw,
        }
    }
}

/// Action encoded in the event-type string, normalized through a synonym
/// table. Archival counts as a logical delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventAction {
    Created,
    Updated,
    Deleted,
    /// Unrecognized action, raw token preserved.
    Other(String),
}

impl EventAction {
    /// Normalize a lowercased action token.
    pub fn parse_str(s: &str) -> Self {
        match s {
            "created" | "create" | "added" | "add" | "new" => Self::Created,
            "updated" | "update" | "changed" | "change" | "modified" | "modify" | "edit"
            | "edited" => Self::Updated,
            "deleted" | "delete" | "removed" | "remove" | "archived" | "archive" => Self::Deleted,
            _ => Self::Other(s.to_string()),
        }
    }

    /// Convert to the canonical token form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::Other(raw) => raw,
        }
    }

    /// Emoji prefix for the notification line.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Created => "➕",
            Self::Updated => "✏️",
            Self::Deleted => "🗑️",
            Self::Other(_) => "🔔",
        }
    }
}

/// Parsed event type: kind plus normalized action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventType {
    pub kind: EventKind,
    pub action: EventAction,
    /// Original event-type string as received.
    pub raw: String,
}

impl EventType {
    /// Split an event-type string like `workitem.created` on the first `.`,
    /// `_` or `-` separator. A string without a separator parses as a kind
    /// with an empty action.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lowered = trimmed.to_lowercase();
        let (kind, action) = match lowered.find(['.', '_', '-']) {
            Some(idx) => (&lowered[..idx], &lowered[idx + 1..]),
            None => (lowered.as_str(), ""),
        };

        Self {
            kind: EventKind::parse_str(kind),
            action: EventAction::parse_str(action),
            raw: trimmed.to_string(),
        }
    }

    /// Fill in the action from an `Action`/`action` payload field when the
    /// event-type string did not carry one.
    #[must_use]
    pub fn with_action_fallback(mut self, payload: &Value) -> Self {
        if matches!(&self.action, EventAction::Other(raw) if raw.is_empty()) {
            if let Some(raw) = payload
                .get("Action")
                .or_else(|| payload.get("action"))
                .and_then(Value::as_str)
            {
                self.action = EventAction::parse_str(&raw.trim().to_lowercase());
            }
        }
        self
    }

    /// Canonical `<kind>.<action>` form used in the notification embed.
    pub fn canonical(&self) -> String {
        let action = self.action.as_str();
        if action.is_empty() {
            self.kind.as_str().to_string()
        } else {
            format!("{}.{}", self.kind.as_str(), action)
        }
    }
}

/// Payload lookup paths for the acting user, most specific first.
const ACTOR_PATHS: &[&[&str]] = &[
    &["User", "User", "Name"],
    &["User", "User", "Username"],
    &["User", "Name"],
    &["UpdatedBy", "Name"],
    &["ChangedBy", "Name"],
    &["Author", "Name"],
    &["UserName"],
    &["Username"],
];

/// Human-readable fields extracted from a notification payload.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub type_name: Option<String>,
    pub actor: Option<String>,
    pub project_id: Option<String>,
    pub design_element_id: Option<String>,
    pub url: Option<String>,
    pub parent_name: Option<String>,
    pub archived: bool,
}

impl EventFields {
    /// Extract fields from a payload, covering both the PascalCase shape
    /// `HacknPlan` sends and a nested `data.*` fallback.
    pub fn extract(payload: &Value, url_template: Option<&str>) -> Self {
        let title = pick_str(
            payload,
            &[
                &["data", "title"],
                &["data", "name"],
                &["Name"],
                &["Title"],
                &["name"],
                &["title"],
            ],
        );

        let description = pick_str(
            payload,
            &[
                &["data", "summary"],
                &["data", "description"],
                &["Description"],
                &["Summary"],
                &["description"],
                &["summary"],
            ],
        );

        let type_name = pick_str(
            payload,
            &[&["Type", "Name"], &["data", "type", "name"], &["TypeName"]],
        );

        let url = pick_str(
            payload,
            &[&["data", "url"], &["data", "webUrl"], &["Url"], &["url"]],
        )
        .or_else(|| url_template.and_then(|t| expand_url_template(t, payload)));

        Self {
            title,
            description,
            type_name,
            actor: pick_str(payload, ACTOR_PATHS),
            project_id: scalar(payload, &[&["ProjectId"], &["data", "projectId"]]),
            design_element_id: scalar(payload, &[&["DesignElementId"], &["data", "id"]]),
            url,
            parent_name: pick_str(payload, &[&["Parent", "Name"]]),
            archived: truthy(payload.get("Archived")) || truthy(payload.get("IsArchived")),
        }
    }
}

/// Walk a nested key path.
fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |cur, key| cur.get(key))
}

/// First non-empty string at any of the given paths, trimmed.
fn pick_str(value: &Value, paths: &[&[&str]]) -> Option<String> {
    paths.iter().find_map(|path| {
        get_path(value, path)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
    })
}

/// First string or number at any of the given paths, rendered as a string.
fn scalar(value: &Value, paths: &[&[&str]]) -> Option<String> {
    paths.iter().find_map(|path| match get_path(value, path)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Loose boolean: JSON `true`, `"true"`, `"1"`, `"yes"` or the number 1.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(s.to_lowercase().as_str(), "true" | "1" | "yes"),
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        _ => false,
    }
}

/// Expand `{Field}` placeholders in a deep-link template from top-level
/// payload scalars. Returns `None` when any placeholder cannot be resolved.
fn expand_url_template(template: &str, payload: &Value) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}')?;
        match payload.get(&after[..end])? {
            Value::String(s) => out.push_str(s),
            Value::Number(n) => out.push_str(&n.to_string()),
            _ => return None,
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Some(out)
}

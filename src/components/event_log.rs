use yew::prelude::*;

pub const MAX_ENTRIES: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub item: String,
    pub x: i32,
    pub y: i32,
    /// `false` when the browser raised the event itself.
    pub synthetic: bool,
}

/// Newest first, capped at `MAX_ENTRIES`.
pub fn push_entry(entries: &[LogEntry], entry: LogEntry) -> Vec<LogEntry> {
    let mut out = Vec::with_capacity(MAX_ENTRIES);
    out.push(entry);
    out.extend(entries.iter().take(MAX_ENTRIES - 1).cloned());
    out
}

#[derive(Properties, PartialEq, Clone)]
pub struct EventLogProps {
    pub entries: Vec<LogEntry>,
}

#[function_component(EventLog)]
pub fn event_log(props: &EventLogProps) -> Html {
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; font-size:12px;">
        <div style="font-weight:600; margin-bottom:4px;">{"contextmenu events"}</div>
        if props.entries.is_empty() {
            <div style="opacity:0.7;">{"Press and hold an item."}</div>
        }
        { for props.entries.iter().map(|e| html! {
            <div style="display:flex; gap:8px;">
                <span style="min-width:70px;">{ if e.synthetic { "long-press" } else { "native" } }</span>
                <span>{ format!("{} @ ({}, {})", e.item, e.x, e.y) }</span>
            </div>
        }) }
    </div>}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: i32) -> LogEntry {
        LogEntry {
            item: format!("item{}", n),
            x: n,
            y: n,
            synthetic: true,
        }
    }

    #[test]
    fn newest_entry_first() {
        let log = push_entry(&[entry(1)], entry(2));
        assert_eq!(log, vec![entry(2), entry(1)]);
    }

    #[test]
    fn log_is_capped() {
        let mut log = Vec::new();
        for n in 0..20 {
            log = push_entry(&log, entry(n));
        }
        assert_eq!(log.len(), MAX_ENTRIES);
        assert_eq!(log[0], entry(19));
        assert_eq!(log[MAX_ENTRIES - 1], entry(12));
    }
}

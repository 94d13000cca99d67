use anyhow::Result;
use kitty_theme::remote::LiveReport;
use kitty_theme::{SwitchResult, ThemeFile};
use serde_json::{Value, json};

use crate::workflow::{Outcome, Status};

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &Outcome) {
	for line in plain_lines(outcome) {
		println!("{line}");
	}
}

fn plain_lines(outcome: &Outcome) -> Vec<String> {
	match outcome {
		Outcome::Help(text) => text.lines().map(str::to_string).collect(),
		Outcome::Themes(themes) => themes.iter().map(|theme| theme.name().to_string()).collect(),
		Outcome::Status(status) => status_lines(status),
		Outcome::Switch { result, .. } => switch_lines(result),
	}
}

fn status_lines(status: &Status) -> Vec<String> {
	let mut lines = Vec::new();
	match &status.active {
		Some((slot, theme)) => lines.push(format!("active: {slot} ({})", theme.name())),
		None => lines.push("active: not configured".to_string()),
	}
	for (slot, theme) in &status.slots {
		let name = theme.as_ref().map(ThemeFile::name).unwrap_or("(unset)");
		lines.push(format!("{slot}: {name}"));
	}
	let reachable = if status.reachable { "reachable" } else { "not reachable" };
	lines.push(format!("kitty: {reachable}"));
	lines
}

fn switch_lines(result: &SwitchResult) -> Vec<String> {
	let mut lines = Vec::new();
	for (slot, theme) in &result.seeded {
		lines.push(format!("seeded {slot} slot with {}", theme.name()));
	}
	match (&result.slot, &result.theme) {
		(Some(slot), Some(theme)) => {
			let marker = if result.active { " (active)" } else { "" };
			lines.push(format!("{slot}: {}{marker}", theme.name()));
		}
		(None, Some(theme)) if result.live.len() <= 1 => {
			lines.push(format!("theme: {}", theme.name()));
		}
		_ => {}
	}
	for report in &result.live {
		lines.extend(report_lines(report));
	}
	if let Some(err) = &result.live_error {
		lines.push(format!("live update skipped: {err}"));
	}
	if result.cancelled {
		lines.push("cycle cancelled".to_string());
	}
	lines
}

fn report_lines(report: &LiveReport) -> Vec<String> {
	let updated = report.outcomes.iter().filter(|outcome| outcome.success()).count();
	let mut lines = vec![format!(
		"live: {} applied to {updated}/{} windows",
		report.theme.name(),
		report.outcomes.len()
	)];
	for failure in report.failures() {
		if let Some(err) = &failure.error {
			lines.push(format!("  {}: {err}", failure.target));
		}
	}
	for warning in &report.warnings {
		lines.push(format!("  line {}: {}", warning.line, warning.reason));
	}
	lines
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &Outcome) -> Result<String> {
	let payload = match outcome {
		Outcome::Help(text) => json!({
			"type": "help",
			"text": text,
		}),
		Outcome::Themes(themes) => json!({
			"type": "themes",
			"themes": themes.iter().map(theme_json).collect::<Vec<_>>(),
		}),
		Outcome::Status(status) => json!({
			"type": "status",
			"active": status.active.as_ref().map(|(slot, theme)| json!({
				"slot": slot.as_str(),
				"theme": theme_json(theme),
			})),
			"slots": status
				.slots
				.iter()
				.map(|(slot, theme)| {
					let theme = theme.as_ref().map(theme_json).unwrap_or(Value::Null);
					(slot.as_str().to_string(), theme)
				})
				.collect::<serde_json::Map<_, _>>(),
			"reachable": status.reachable,
		}),
		Outcome::Switch { action, result } => json!({
			"type": "switch",
			"action": action,
			"slot": result.slot.map(|slot| slot.as_str()),
			"theme": result.theme.as_ref().map(theme_json),
			"active": result.active,
			"seeded": result
				.seeded
				.iter()
				.map(|(slot, theme)| json!({ "slot": slot.as_str(), "theme": theme_json(theme) }))
				.collect::<Vec<_>>(),
			"live": result.live.iter().map(report_json).collect::<Vec<_>>(),
			"live_error": result.live_error.as_ref().map(|err| err.to_string()),
			"cancelled": result.cancelled,
			"clean": result.is_clean(),
		}),
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

fn theme_json(theme: &ThemeFile) -> Value {
	json!({
		"name": theme.name(),
		"path": theme.path().display().to_string(),
	})
}

fn report_json(report: &LiveReport) -> Value {
	json!({
		"theme": report.theme.name(),
		"applied": report.applied,
		"targets": report.outcomes.iter().map(|outcome| json!({
			"target": outcome.target.to_string(),
			"success": outcome.success(),
			"error": outcome.error.as_ref().map(|err| json!({
				"kind": err.kind(),
				"message": err.to_string(),
			})),
		})).collect::<Vec<_>>(),
		"warnings": report.warnings.iter().map(|warning| json!({
			"line": warning.line,
			"reason": warning.reason,
		})).collect::<Vec<_>>(),
	})
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &Outcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

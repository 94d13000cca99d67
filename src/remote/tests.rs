use std::fs;

use tempfile::{TempDir, tempdir};

use super::testing::{Behavior, ScriptedChannel};
use super::*;

fn theme_file(contents: &str) -> (TempDir, ThemeFile) {
	let dir = tempdir().unwrap();
	let path = dir.path().join("Nord.conf");
	fs::write(&path, contents).unwrap();
	(dir, ThemeFile::new(path))
}

#[test]
fn ping_reports_liveness_without_failing() {
	let online = RemoteControlClient::new(Box::new(ScriptedChannel::with_windows(&[1])));
	let offline = RemoteControlClient::new(Box::new(ScriptedChannel::offline()));

	assert!(online.ping());
	assert!(!offline.ping());
}

#[test]
fn one_timed_out_target_does_not_stop_the_others() {
	let (_dir, theme) = theme_file("foreground #d8dee9\nbackground #2e3440\n");
	let channel =
		ScriptedChannel::with_windows(&[1, 2, 3]).behave(2, Behavior::Timeout);
	let log = channel.log();
	let client = RemoteControlClient::new(Box::new(channel));

	let report = client.apply_live(&theme).unwrap();

	let outcomes: Vec<_> = report
		.outcomes
		.iter()
		.map(|outcome| (outcome.target, outcome.success()))
		.collect();
	assert_eq!(
		outcomes,
		vec![
			(RemoteTarget::Window(1), true),
			(RemoteTarget::Window(2), false),
			(RemoteTarget::Window(3), true),
		]
	);
	assert!(matches!(report.outcomes[1].error, Some(ChannelError::Timeout)));
	assert!(!report.all_succeeded());
	assert_eq!(report.failures().count(), 1);
	assert_eq!(report.applied, 2);
	// One listing plus one complete command per window.
	assert_eq!(log.borrow().len(), 4);
}

#[test]
fn rejected_target_is_recorded_with_its_message() {
	let (_dir, theme) = theme_file("background #000000\n");
	let channel = ScriptedChannel::with_windows(&[5, 6]).behave(5, Behavior::Reject("no such window"));
	let client = RemoteControlClient::new(Box::new(channel));

	let report = client.apply_live(&theme).unwrap();

	match &report.outcomes[0].error {
		Some(ChannelError::Rejected { message }) => assert_eq!(message, "no such window"),
		other => panic!("expected rejection, got {other:?}"),
	}
	assert!(report.outcomes[1].success());
}

#[test]
fn closed_channel_fails_the_whole_call() {
	let (_dir, theme) = theme_file("background #000000\n");
	let client = RemoteControlClient::new(Box::new(ScriptedChannel::offline()));

	let err = client.apply_live(&theme).unwrap_err();
	assert!(matches!(
		err,
		EngineError::Channel(ChannelError::Unavailable { .. })
	));
}

#[test]
fn malformed_lines_become_warnings_not_failures() {
	let (_dir, theme) = theme_file("foreground #fff\nbackground\ncolor1 #ff0000\n");
	let channel = ScriptedChannel::with_windows(&[1]);
	let log = channel.log();
	let client = RemoteControlClient::new(Box::new(channel));

	let report = client.apply_live(&theme).unwrap();

	assert_eq!(report.applied, 2);
	assert_eq!(report.warnings.len(), 1);
	assert_eq!(report.warnings[0].line, 2);
	let sent = log.borrow();
	match sent.last() {
		Some(RemoteCommand::SetColors { colors, .. }) => assert_eq!(colors.len(), 2),
		other => panic!("expected set-colors, got {other:?}"),
	}
}

#[test]
fn preview_targets_only_the_active_window() {
	let (_dir, theme) = theme_file("background #000000\n");
	let channel = ScriptedChannel::with_windows(&[1, 2]);
	let log = channel.log();
	let client = RemoteControlClient::new(Box::new(channel));

	let report = client.preview(&theme).unwrap();

	assert_eq!(report.outcomes.len(), 1);
	assert_eq!(report.outcomes[0].target, RemoteTarget::Active);
	assert_eq!(log.borrow().len(), 1);
}

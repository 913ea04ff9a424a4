use std::io::Cursor;

use menu_core::config::NavigatorConfig;
use menu_core::renderer::terminal::{Command, SessionEnd};
use menu_core::{Navigator, Screen, TerminalRenderer};

fn navigator() -> Navigator {
    let mut nav = Navigator::new(NavigatorConfig {
        start_screen: Some("main".into()),
        ..NavigatorConfig::default()
    });
    nav.start(&mut vec![
        Screen::builder("main").build(),
        Screen::builder("settings").build(),
        Screen::builder("audio").build(),
        Screen::builder("credits").end_screen(true).build(),
    ]);
    nav
}

fn run(script: &str) -> (Navigator, SessionEnd, String) {
    let mut nav = navigator();
    let mut term = TerminalRenderer::with_io(Cursor::new(script.to_string()), Vec::new());
    let end = term.run_event_loop(&mut nav).unwrap();
    let output = String::from_utf8(term.output().clone()).unwrap();
    (nav, end, output)
}

fn current(nav: &Navigator) -> &str {
    nav.current_screen().unwrap().tag()
}

#[test]
fn parses_commands() {
    assert_eq!(Command::parse("go settings"), Some(Command::Go("settings".into())));
    assert_eq!(Command::parse("  SWITCH   audio "), Some(Command::Switch("audio".into())));
    assert_eq!(Command::parse(""), Some(Command::Back));
    assert_eq!(Command::parse("back"), Some(Command::Back));
    assert_eq!(Command::parse("home"), Some(Command::Home));
    assert_eq!(Command::parse("lock"), Some(Command::Lock));
    assert_eq!(Command::parse("reload"), Some(Command::Reload));
    assert_eq!(Command::parse("quit"), Some(Command::Exit));
    assert_eq!(Command::parse("go"), None);
    assert_eq!(Command::parse("back twice"), None);
    assert_eq!(Command::parse("dance"), None);
}

#[test]
fn navigates_and_renders_history() {
    let (nav, end, output) = run("go settings\ngo audio\n");

    assert_eq!(end, SessionEnd::Eof);
    assert_eq!(current(&nav), "audio");
    assert!(output.contains("[Screen] main | history: -"));
    assert!(output.contains("[Screen] audio | history: settings < main"));
}

#[test]
fn empty_line_goes_back() {
    let (nav, _, _) = run("go settings\ngo audio\n\n");
    assert_eq!(current(&nav), "settings");
    assert_eq!(nav.history_len(), 1);
}

#[test]
fn lock_blocks_back() {
    let (nav, _, output) = run("go settings\nlock\nback\n");
    assert_eq!(current(&nav), "settings");
    assert!(output.contains("[Lock] back locked"));
}

#[test]
fn home_and_end_screens() {
    let (nav, _, output) = run("go settings\ngo credits\ngo audio\nhome\n");
    assert_eq!(current(&nav), "main");
    assert!(output.contains("[Screen] credits (end)"));
}

#[test]
fn unknown_and_invalid_input() {
    let (nav, _, output) = run("go nowhere\nfly\n");
    assert_eq!(current(&nav), "main");
    assert!(output.contains("unknown screen 'nowhere'"));
    assert!(output.contains("invalid"));
}

#[test]
fn exit_and_reload_end_the_session() {
    let (nav, end, _) = run("exit\ngo settings\n");
    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(current(&nav), "main");
    assert!(!nav.is_cancel_bound());

    let (_, end, _) = run("reload\n");
    assert_eq!(end, SessionEnd::Reload);
}

#[test]
fn lock_interceptor_is_removed_after_each_session() {
    let mut nav = navigator();

    for _ in 0..3 {
        let mut term = TerminalRenderer::with_io(Cursor::new("go settings\nlock\n".to_string()), Vec::new());
        term.run_event_loop(&mut nav).unwrap();
        assert!(term.is_locked());
        assert!(nav.interceptors_mut().is_empty());
    }

    // the stale lock from the sessions above does not block back
    assert!(nav.request_back());
    assert_eq!(nav.history_len(), 2);
}

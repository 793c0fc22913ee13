mod common;

use common::*;
use cmdspec_core::commands::{
    CommandError, CommandSource, CommandTree, PLAYERS, ParseFailure, Selector, SelectorError,
    resolve_players,
};

fn names(players: Vec<cmdspec_core::player::Player>) -> Vec<String> {
    players.into_iter().map(|player| player.name).collect()
}

#[test]
fn all_players() {
    let server = TestServer::new();
    let sender = TestSender::console();
    let source = CommandSource::new(&server, &sender);
    assert_eq!(names(resolve_players(source, "@a").unwrap()), vec!["Alice", "Bob"]);
}

#[test]
fn sender_selector() {
    let server = TestServer::new();
    let player = TestSender::player(alice());
    let source = CommandSource::new(&server, &player);
    assert_eq!(names(resolve_players(source, "@s").unwrap()), vec!["Alice"]);

    let console = TestSender::console();
    let source = CommandSource::new(&server, &console);
    assert_eq!(
        resolve_players(source, "@s"),
        Err(ParseFailure::Selector(SelectorError::SenderNotPlayer))
    );
}

#[test]
fn sender_selector_from_console_fails_dispatch() {
    let tree = CommandTree::builder("heal")
        .argument(&PLAYERS)
        .executes(|_| Ok(()))
        .build()
        .unwrap();
    let server = TestServer::new();
    let console = TestSender::console();
    let err = tree
        .dispatch(CommandSource::new(&server, &console), &["heal", "@s"])
        .unwrap_err();
    assert!(matches!(
        err,
        CommandError::Parse(ParseFailure::Selector(SelectorError::SenderNotPlayer))
    ));
    assert_eq!(err.to_string(), "@s can only be used by players");
}

#[test]
fn nearest_player_is_the_sender_or_random() {
    let server = TestServer::new().random_choice(1);
    let player = TestSender::player(alice());
    let source = CommandSource::new(&server, &player);
    assert_eq!(names(resolve_players(source, "@p").unwrap()), vec!["Alice"]);
    assert_eq!(server.random_calls(), 0);

    let console = TestSender::console();
    let source = CommandSource::new(&server, &console);
    assert_eq!(names(resolve_players(source, "@p").unwrap()), vec!["Bob"]);
    assert_eq!(server.random_calls(), 1);
}

#[test]
fn random_player_uses_host_randomness() {
    let server = TestServer::new().random_choice(0);
    let sender = TestSender::player(bob());
    let source = CommandSource::new(&server, &sender);
    assert_eq!(names(resolve_players(source, "@r").unwrap()), vec!["Alice"]);

    let server = TestServer::new().random_choice(1);
    let source = CommandSource::new(&server, &sender);
    assert_eq!(names(resolve_players(source, "@R").unwrap()), vec!["Bob"]);
}

#[test]
fn random_selectors_need_someone_online() {
    let server = TestServer::with_players(Vec::new());
    let console = TestSender::console();
    let source = CommandSource::new(&server, &console);
    for token in ["@r", "@p"] {
        assert_eq!(
            resolve_players(source, token),
            Err(ParseFailure::Selector(SelectorError::NoPlayersOnline))
        );
    }
    assert_eq!(names(resolve_players(source, "@a").unwrap()), Vec::<String>::new());
}

#[test]
fn exact_names_ignore_case() {
    let server = TestServer::new();
    let sender = TestSender::console();
    let source = CommandSource::new(&server, &sender);
    assert_eq!(names(resolve_players(source, "bOB").unwrap()), vec!["Bob"]);

    let err = resolve_players(source, "Carol").unwrap_err();
    assert_eq!(err.to_string(), "Player Carol not found");
    let err = resolve_players(source, "Ali").unwrap_err();
    assert_eq!(err, ParseFailure::PlayerNotFound { name: "Ali".to_string() });
}

#[test]
fn selector_tokens() {
    assert_eq!(Selector::parse("@A"), Some(Selector::AllPlayers));
    assert_eq!(Selector::parse("@s"), Some(Selector::Sender));
    assert_eq!(Selector::parse("@e"), None);
    assert_eq!(Selector::parse("Alice"), None);
}

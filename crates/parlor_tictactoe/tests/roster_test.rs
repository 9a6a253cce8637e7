//! Tests for player configuration: symbols, names, lock, defaults.

use parlor_tictactoe::{GameSession, Slot, SymbolError, DEFAULT_SYMBOLS, PRESET_SYMBOLS};

#[test]
fn test_duplicate_symbol_rejected() {
    let mut session = GameSession::new();

    let result = session.set_player_symbol(Slot::Two, "X");
    assert!(matches!(result, Err(SymbolError::Taken(_))));
    assert_eq!(session.roster().symbol(Slot::Two).as_str(), "O");
}

#[test]
fn test_symbols_lock_on_first_move() {
    let mut session = GameSession::new();
    session.apply_move(0).unwrap();

    // Locked for both slots, whatever the candidate.
    assert_eq!(session.set_player_symbol(Slot::One, "★"), Err(SymbolError::Locked));
    assert_eq!(session.set_player_symbol(Slot::Two, "●"), Err(SymbolError::Locked));
    assert_eq!(session.roster().symbol(Slot::One).as_str(), "X");
    assert_eq!(session.roster().symbol(Slot::Two).as_str(), "O");
}

#[test]
fn test_symbols_configurable_before_first_move() {
    let mut session = GameSession::new();
    session.set_player_symbol(Slot::One, "🙂").unwrap();
    session.set_player_symbol(Slot::Two, "🔥").unwrap();

    session.apply_move(0).unwrap();
    session.apply_move(1).unwrap();

    let cells = session.board().cells();
    assert_eq!(cells[0].as_ref().unwrap().as_str(), "🙂");
    assert_eq!(cells[1].as_ref().unwrap().as_str(), "🔥");
}

#[test]
fn test_blank_and_whitespace_symbols_rejected() {
    let mut session = GameSession::new();
    assert_eq!(session.set_player_symbol(Slot::One, ""), Err(SymbolError::Blank));
    assert_eq!(session.set_player_symbol(Slot::One, "   "), Err(SymbolError::Blank));
    assert_eq!(session.roster().symbol(Slot::One).as_str(), "X");
}

#[test]
fn test_custom_symbol_text_is_trimmed() {
    let mut session = GameSession::new();
    session.set_player_symbol(Slot::Two, "  Zap  ").unwrap();
    assert_eq!(session.roster().symbol(Slot::Two).as_str(), "Zap");
}

#[test]
fn test_names_are_free_form() {
    let mut session = GameSession::new();

    session.set_player_name(Slot::One, "Ada");
    assert_eq!(session.roster().display_name(Slot::One), "Ada");

    // Empty names are stored but display as the placeholder.
    session.set_player_name(Slot::One, "");
    assert_eq!(session.roster().display_name(Slot::One), "Player 1");

    // Renaming is allowed mid-round; only symbols lock.
    session.apply_move(0).unwrap();
    session.set_player_name(Slot::Two, "Grace");
    assert_eq!(session.roster().display_name(Slot::Two), "Grace");
}

#[test]
fn test_reset_player_config_restores_defaults_and_clears_scores() {
    let mut session = GameSession::new();
    session.set_player_name(Slot::One, "Ada");
    session.set_player_symbol(Slot::One, "★").unwrap();
    for index in [0, 4, 1, 3, 2] {
        session.apply_move(index).unwrap();
    }
    assert_eq!(session.scores().wins(Slot::One), 1);

    session.reset_player_config();

    assert_eq!(session.roster().display_name(Slot::One), "Player 1");
    assert_eq!(session.roster().symbol(Slot::One).as_str(), DEFAULT_SYMBOLS[0]);
    assert_eq!(session.roster().symbol(Slot::Two).as_str(), DEFAULT_SYMBOLS[1]);
    assert_eq!(session.scores().wins(Slot::One), 0);
    assert_eq!(session.board().mark_count(), 0);
    assert!(!session.symbols_locked());
}

#[test]
fn test_unlock_after_full_undo_allows_reconfiguration() {
    let mut session = GameSession::new();
    session.apply_move(4).unwrap();
    assert_eq!(session.set_player_symbol(Slot::One, "★"), Err(SymbolError::Locked));

    session.undo();
    session.set_player_symbol(Slot::One, "★").unwrap();
    assert_eq!(session.current_symbol().as_str(), "★");
}

#[test]
fn test_symbols_stay_distinct_through_any_sequence() {
    let mut session = GameSession::new();

    let candidates = ["O", "X", "★", "", "  ", "X", "★", "O"];
    for (i, candidate) in candidates.iter().enumerate() {
        let slot = if i % 2 == 0 { Slot::One } else { Slot::Two };
        let _ = session.set_player_symbol(slot, candidate);
        assert_ne!(
            session.roster().symbol(Slot::One),
            session.roster().symbol(Slot::Two)
        );
    }

    session.verify().expect("Session invariants hold");
}

#[test]
fn test_preset_palette_is_usable() {
    let mut session = GameSession::new();

    // Every preset other than the opponent's current symbol is accepted.
    for preset in PRESET_SYMBOLS {
        let result = session.set_player_symbol(Slot::One, preset);
        if preset == session.roster().symbol(Slot::Two).as_str() {
            assert!(matches!(result, Err(SymbolError::Taken(_))));
        } else {
            result.expect("Preset accepted");
        }
    }
}

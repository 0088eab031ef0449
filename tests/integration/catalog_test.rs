//! Catalog output checked through a real VT parser.

use ansikit::seq::{attr, color, cursor, link, Color, ESC};

use crate::helpers::{csi, parse, Event};

/// Every fixed SGR color constant with its code.
const COLOR_CONSTANTS: [(&str, u16); 32] = [
    (color::FG_BLACK, 30),
    (color::FG_RED, 31),
    (color::FG_GREEN, 32),
    (color::FG_YELLOW, 33),
    (color::FG_BLUE, 34),
    (color::FG_MAGENTA, 35),
    (color::FG_CYAN, 36),
    (color::FG_WHITE, 37),
    (color::FG_BRIGHT_BLACK, 90),
    (color::FG_BRIGHT_RED, 91),
    (color::FG_BRIGHT_GREEN, 92),
    (color::FG_BRIGHT_YELLOW, 93),
    (color::FG_BRIGHT_BLUE, 94),
    (color::FG_BRIGHT_MAGENTA, 95),
    (color::FG_BRIGHT_CYAN, 96),
    (color::FG_BRIGHT_WHITE, 97),
    (color::BG_BLACK, 40),
    (color::BG_RED, 41),
    (color::BG_GREEN, 42),
    (color::BG_YELLOW, 43),
    (color::BG_BLUE, 44),
    (color::BG_MAGENTA, 45),
    (color::BG_CYAN, 46),
    (color::BG_WHITE, 47),
    (color::BG_BRIGHT_BLACK, 100),
    (color::BG_BRIGHT_RED, 101),
    (color::BG_BRIGHT_GREEN, 102),
    (color::BG_BRIGHT_YELLOW, 103),
    (color::BG_BRIGHT_BLUE, 104),
    (color::BG_BRIGHT_MAGENTA, 105),
    (color::BG_BRIGHT_CYAN, 106),
    (color::BG_BRIGHT_WHITE, 107),
];

// ============================================================================
// Fixed entries
// ============================================================================

#[test]
fn every_fixed_entry_starts_with_escape() {
    let mut fixed: Vec<&str> = COLOR_CONSTANTS.iter().map(|(seq, _)| *seq).collect();
    fixed.extend(attr::ALL.iter().map(|(seq, _)| *seq));
    fixed.extend([
        cursor::SAVE,
        cursor::RESTORE,
        cursor::CLEAR_SCREEN,
        cursor::CLEAR_LINE,
        link::END,
    ]);

    for seq in fixed {
        assert_eq!(seq.as_bytes()[0], 0x1b, "Failed for {:?}", seq);
        assert!(seq.starts_with(ESC));
    }
}

#[test]
fn attributes_parse_as_single_sgr() {
    for (seq, code) in attr::ALL {
        let expected = vec![csi(&[u16::from(*code)], 'm')];
        assert_eq!(parse(seq), expected, "Failed for {:?}", seq);
    }
}

#[test]
fn color_constants_parse_as_single_sgr() {
    for (seq, code) in COLOR_CONSTANTS {
        assert_eq!(parse(seq), vec![csi(&[code], 'm')], "Failed for {:?}", seq);
    }
}

#[test]
fn color_constants_are_distinct() {
    let mut seen: Vec<&str> = COLOR_CONSTANTS.iter().map(|(seq, _)| *seq).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 32);
}

#[test]
fn clear_entries_parse_as_erase() {
    assert_eq!(parse(cursor::CLEAR_SCREEN), vec![csi(&[2], 'J')]);
    assert_eq!(parse(cursor::CLEAR_LINE), vec![csi(&[2], 'K')]);
}

#[test]
fn save_and_restore_final_bytes() {
    assert!(matches!(parse(cursor::SAVE).as_slice(), [Event::Csi { action: 's', .. }]));
    assert!(matches!(parse(cursor::RESTORE).as_slice(), [Event::Csi { action: 'u', .. }]));
}

// ============================================================================
// Parameterized entries
// ============================================================================

#[test]
fn bold_scenario() {
    assert_eq!(attr::BOLD.as_bytes(), b"\x1b[1m");
}

#[test]
fn cursor_up_five_scenario() {
    let seq = cursor::up("5");
    assert_eq!(seq.as_bytes(), b"\x1b[5A");
    assert_eq!(parse(&seq), vec![csi(&[5], 'A')]);
}

#[test]
fn cursor_directions_parse() {
    let test_cases = [
        (cursor::up(7), 'A'),
        (cursor::down(7), 'B'),
        (cursor::forward(7), 'C'),
        (cursor::back(7), 'D'),
    ];

    for (seq, action) in test_cases {
        assert_eq!(parse(&seq), vec![csi(&[7], action)], "Failed for {:?}", seq);
    }
}

#[test]
fn fg_256_scenario() {
    let seq = color::fg_256("200");
    assert_eq!(seq.as_bytes(), b"\x1b[38;5;200m");
    assert_eq!(parse(&seq), vec![csi(&[38, 5, 200], 'm')]);
}

#[test]
fn rgb_foreground_scenario() {
    let seq = color::fg_rgb("255", "0", "0");
    assert_eq!(seq.as_bytes(), b"\x1b[38;2;255;0;0m");
    assert_eq!(parse(&seq), vec![csi(&[38, 2, 255, 0, 0], 'm')]);
}

#[test]
fn rgb_background_parses() {
    assert_eq!(
        parse(color::bg_rgb(10, 20, 30)),
        vec![csi(&[48, 2, 10, 20, 30], 'm')]
    );
}

#[test]
fn color_enum_matches_constants() {
    assert_eq!(Color::Red.fg(), color::FG_RED);
    assert_eq!(Color::BrightWhite.bg(), color::BG_BRIGHT_WHITE);
    assert_eq!(parse(Color::Indexed(42).bg()), vec![csi(&[48, 5, 42], 'm')]);
}

#[test]
fn same_parameters_same_bytes() {
    assert_eq!(color::fg_rgb(1, 2, 3), color::fg_rgb(1, 2, 3));
    assert_eq!(cursor::back("12"), cursor::back(12));
    assert_eq!(link::start("x"), link::start("x"));
}

// ============================================================================
// Hyperlinks
// ============================================================================

#[test]
fn hyperlink_scenario() {
    let start = link::start("https://example.com");
    assert_eq!(
        parse(&start),
        vec![Event::Osc {
            params: vec![b"8".to_vec(), b"".to_vec(), b"https://example.com".to_vec()],
        }]
    );

    let end = parse(link::END);
    let [Event::Osc { params }] = end.as_slice() else {
        panic!("expected one OSC, got {:?}", end);
    };
    assert_eq!(params[0], b"8");
    assert!(params[1..].iter().all(|p| p.is_empty()));
}

#[test]
fn wrapped_link_prints_text_between_oscs() {
    let events = parse(link::wrap("https://example.com", "hi"));
    assert_eq!(events.len(), 4);
    assert!(matches!(events[0], Event::Osc { .. }));
    assert_eq!(events[1], Event::Print('h'));
    assert_eq!(events[2], Event::Print('i'));
    assert!(matches!(events[3], Event::Osc { .. }));
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn builders_are_usable_from_many_threads() {
    let handles: Vec<_> = (0..8u8)
        .map(|i| std::thread::spawn(move || (i, color::fg_256(i), cursor::down(i))))
        .collect();

    for handle in handles {
        let (i, fg, down) = handle.join().unwrap();
        assert_eq!(fg, color::fg_256(i));
        assert_eq!(down.into_string(), format!("\x1b[{i}B"));
    }
}

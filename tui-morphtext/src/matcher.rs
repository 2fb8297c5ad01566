use crate::layout::Glyph;

/// Pair identical characters between an outgoing and an incoming line.
///
/// Greedy first-fit: outgoing glyphs not yet moving are visited in text
/// order, and each one claims the first unclaimed incoming glyph with the
/// same character. Matched pairs are flagged `moving`, with the outgoing
/// glyph targeting the incoming position. Repeated characters pair up
/// strictly by scan order, so the result is deterministic for any input,
/// and a pair once made is never reassigned.
pub fn pair_glyphs(outgoing: &mut [Glyph], incoming: &mut [Glyph]) {
    for old in outgoing.iter_mut() {
        if old.moving {
            continue;
        }

        for new in incoming.iter_mut() {
            if !new.moving && new.ch == old.ch {
                old.moving = true;
                old.target_x = new.x;
                new.moving = true;
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;
    use crate::measure::CellMeasurer;
    use crate::style::TextStyle;

    fn glyphs(text: &str) -> Vec<Glyph> {
        layout(&CellMeasurer, text, &TextStyle::default())
            .expect("cell layout is infallible")
            .glyphs
    }

    fn paired(old_text: &str, new_text: &str) -> (Vec<Glyph>, Vec<Glyph>) {
        let mut old = glyphs(old_text);
        let mut new = glyphs(new_text);
        pair_glyphs(&mut old, &mut new);
        (old, new)
    }

    #[test]
    fn shared_characters_move_to_their_new_positions() {
        let (old, new) = paired("cat", "cast");

        assert!(old.iter().all(|g| g.moving), "c, a and t all survive");
        assert_eq!(old[0].target_x, new[0].x);
        assert_eq!(old[1].target_x, new[1].x);
        assert_eq!(old[2].target_x, new[3].x, "t pairs past the inserted s");

        assert!(new[0].moving);
        assert!(new[1].moving);
        assert!(!new[2].moving, "the inserted s fades in");
        assert!(new[3].moving);
    }

    #[test]
    fn disjoint_strings_match_nothing() {
        let (old, new) = paired("ab", "cd");

        assert!(old.iter().all(|g| !g.moving));
        assert!(new.iter().all(|g| !g.moving));
    }

    #[test]
    fn repeated_characters_pair_by_scan_order() {
        let (old, new) = paired("aa", "a");

        assert!(old[0].moving);
        assert_eq!(old[0].target_x, new[0].x);
        assert!(!old[1].moving, "second a has no partner left");
    }

    #[test]
    fn surplus_incoming_duplicates_fade_in() {
        let (old, new) = paired("a", "aa");

        assert!(old[0].moving);
        assert_eq!(old[0].target_x, new[0].x);
        assert!(new[0].moving);
        assert!(!new[1].moving);
    }

    #[test]
    fn pairing_again_reassigns_nothing() {
        let (mut old, mut new) = paired("a", "aa");
        pair_glyphs(&mut old, &mut new);

        assert_eq!(old[0].target_x, new[0].x, "the original pair holds");
        assert!(!new[1].moving, "the surplus duplicate stays unclaimed");
    }

    #[test]
    fn matching_is_case_sensitive() {
        let (old, new) = paired("A", "a");

        assert!(!old[0].moving);
        assert!(!new[0].moving);
    }

    #[test]
    fn empty_sides_are_harmless() {
        let (old, _) = paired("x", "");
        assert!(!old[0].moving);

        let (_, new) = paired("", "x");
        assert!(!new[0].moving);
    }
}

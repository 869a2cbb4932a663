//! Root cause analysis step: a fixed-depth "5 Whys" chain.

use serde::{Deserialize, Serialize};

/// Depth of the 5 Whys chain.
pub const CHAIN_DEPTH: usize = 5;

/// One answer in the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootCause {
    pub why: String,
}

impl RootCause {
    pub fn new(why: impl Into<String>) -> Self {
        Self { why: why.into() }
    }

    pub fn is_filled(&self) -> bool {
        !self.why.is_empty()
    }
}

/// The 5 Whys chain.
///
/// # Invariants
///
/// - Always holds exactly [`CHAIN_DEPTH`] entries (enforced by the array type;
///   persisted chains of any other length fail to deserialize)
/// - Entries are addressed by position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootCauseChain([RootCause; CHAIN_DEPTH]);

impl RootCauseChain {
    /// Five empty answers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a chain from up to five answers; missing slots stay empty.
    pub fn from_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut chain = Self::empty();
        for (slot, why) in chain.0.iter_mut().zip(answers) {
            slot.why = why.into();
        }
        chain
    }

    pub fn causes(&self) -> &[RootCause] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&RootCause> {
        self.0.get(index)
    }

    /// Returns a copy with the answer at `index` replaced.
    ///
    /// Indices beyond the chain depth leave the chain unchanged.
    pub fn update_at(&self, index: usize, why: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.0.get_mut(index) {
            *slot = RootCause::new(why);
        }
        next
    }

    /// Five fresh empty answers, discarding all prior content.
    pub fn reset(&self) -> Self {
        Self::empty()
    }

    /// Number of answers the form reveals.
    ///
    /// This is the filled prefix plus the next empty slot, capped at the
    /// chain depth; an answer is only shown once every answer before it is
    /// filled.
    pub fn visible_count(&self) -> usize {
        match self.0.iter().position(|c| !c.is_filled()) {
            Some(first_empty) => first_empty + 1,
            None => CHAIN_DEPTH,
        }
    }

    /// The answers currently revealed, in order.
    pub fn visible(&self) -> &[RootCause] {
        &self.0[..self.visible_count()]
    }

    /// Non-empty answers in index order.
    pub fn filled(&self) -> impl Iterator<Item = &RootCause> {
        self.0.iter().filter(|c| c.is_filled())
    }

    /// True once all five answers are filled in.
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(RootCause::is_filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_has_five_blank_slots() {
        let chain = RootCauseChain::empty();
        assert_eq!(chain.causes().len(), CHAIN_DEPTH);
        assert!(chain.causes().iter().all(|c| c.why.is_empty()));
    }

    #[test]
    fn reset_always_yields_five_blanks() {
        let chain = RootCauseChain::from_answers(["a", "b", "c", "d", "e"]);
        let reset = chain.reset();
        assert_eq!(reset, RootCauseChain::empty());
        assert_eq!(reset.causes().len(), 5);
        assert!(chain.is_complete());
    }

    #[test]
    fn update_at_replaces_only_target_slot() {
        let chain = RootCauseChain::from_answers(["first", "second"]);
        let next = chain.update_at(1, "changed");

        assert_eq!(next.get(0).unwrap().why, "first");
        assert_eq!(next.get(1).unwrap().why, "changed");
        assert_eq!(chain.get(1).unwrap().why, "second");
    }

    #[test]
    fn update_past_depth_is_noop() {
        let chain = RootCauseChain::from_answers(["only"]);
        assert_eq!(chain.update_at(5, "overflow"), chain);
    }

    #[test]
    fn visible_count_reveals_one_past_filled_prefix() {
        assert_eq!(RootCauseChain::empty().visible_count(), 1);
        assert_eq!(RootCauseChain::from_answers(["a"]).visible_count(), 2);
        assert_eq!(RootCauseChain::from_answers(["a", "b", "c", "d"]).visible_count(), 5);
        assert_eq!(
            RootCauseChain::from_answers(["a", "b", "c", "d", "e"]).visible_count(),
            5
        );
    }

    #[test]
    fn visible_count_stops_at_first_gap() {
        let chain = RootCauseChain::from_answers(["a", "", "c"]);
        assert_eq!(chain.visible_count(), 2);
        assert_eq!(chain.visible().len(), 2);
    }

    #[test]
    fn whitespace_answer_counts_as_filled() {
        let chain = RootCauseChain::from_answers([" "]);
        assert_eq!(chain.visible_count(), 2);
    }

    #[test]
    fn filled_skips_gaps_in_order() {
        let chain = RootCauseChain::from_answers(["a", "", "c"]);
        let whys: Vec<_> = chain.filled().map(|c| c.why.as_str()).collect();
        assert_eq!(whys, vec!["a", "c"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let chain = RootCauseChain::from_answers(["x"]);
        let json = serde_json::to_string(&chain).unwrap();
        assert_eq!(
            json,
            r#"[{"why":"x"},{"why":""},{"why":""},{"why":""},{"why":""}]"#
        );
    }

    #[test]
    fn rejects_chain_of_wrong_length() {
        let result: Result<RootCauseChain, _> = serde_json::from_str(r#"[{"why":"x"}]"#);
        assert!(result.is_err());
    }
}

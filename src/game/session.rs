//! Turn loop for a single hand and orchestration of a whole game

use super::dictionary::Dictionary;
use super::scoring::word_score;
use super::validation::validate;
use super::Hand;
use crate::console::Console;
use anyhow::Result;
use rand::Rng;

/// Input that ends a hand early.
pub const QUIT_SENTINEL: &str = "!!";

/// Lifecycle of a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandState {
    Playing,
    FinishedExhausted,
    FinishedQuit,
}

/// Turn loop for one dealt hand.
///
/// Each turn shows the hand and asks for a word. A valid word scores
/// and reports; an invalid word reports and scores nothing; both use
/// up their letters. The hand ends when its letters run out or the
/// player enters the quit sentinel.
pub struct HandSession {
    hand: Hand,
    score: u32,
    state: HandState,
}

impl HandSession {
    pub fn new(hand: Hand) -> Self {
        Self {
            hand,
            score: 0,
            state: HandState::Playing,
        }
    }

    pub fn state(&self) -> HandState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Run the hand to completion and return its score.
    pub fn run<C: Console>(&mut self, dictionary: &Dictionary, console: &mut C) -> Result<u32> {
        while self.state == HandState::Playing {
            if self.hand.is_empty() {
                self.state = HandState::FinishedExhausted;
                console.write_line(&format!(
                    "Ran out of letters. Total score: {} points",
                    self.score
                ))?;
                break;
            }
            console.write_line(&format!("Current Hand: {}", self.hand))?;
            let input =
                console.read_line("Enter word, or \"!!\" to indicate that you are finished: ")?;
            let word = input.trim().to_string();
            if word == QUIT_SENTINEL {
                self.state = HandState::FinishedQuit;
                console.write_line(&format!("Total score: {}", self.score))?;
                break;
            }
            // hand length for the bonus is taken before the word
            // consumes its letters
            let hand_len = self.hand.len();
            let verdict = validate(&word, &self.hand, dictionary);
            if verdict.is_valid() {
                let points = word_score(&word, hand_len)?;
                self.score += points;
                console.write_line(&format!(
                    "\"{}\" earned {} points. Total: {} points",
                    word, points, self.score
                ))?;
            } else {
                log::debug!("rejected {:?}: {}", word, verdict.message());
                console.write_line("That is not a valid word. Please choose another word.")?;
            }
            // valid or not, the word uses up its letters
            self.hand = self.hand.consume(&word);
        }
        Ok(self.score)
    }
}

/// One-shot options and running totals for a series of hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SessionState {
    total_score: u32,
    hands_remaining: u32,
    substitution_used: bool,
    replay_used: bool,
}

impl SessionState {
    fn new(hands_remaining: u32) -> Self {
        Self {
            total_score: 0,
            hands_remaining,
            substitution_used: false,
            replay_used: false,
        }
    }
}

/// A full game: a requested number of hands played in sequence, with
/// one letter substitution and one hand replay available across the
/// whole series.
pub struct GameSession<'a, C: Console, R: Rng> {
    dictionary: &'a Dictionary,
    console: &'a mut C,
    rng: &'a mut R,
    hand_size: usize,
    state: SessionState,
}

impl<'a, C: Console, R: Rng> GameSession<'a, C, R> {
    pub fn new(
        dictionary: &'a Dictionary,
        console: &'a mut C,
        rng: &'a mut R,
        hand_size: usize,
    ) -> Self {
        Self {
            dictionary,
            console,
            rng,
            hand_size,
            state: SessionState::new(0),
        }
    }

    pub fn total_score(&self) -> u32 {
        self.state.total_score
    }

    /// Play `num_hands` rounds and return the grand total.
    pub fn run(&mut self, num_hands: u32) -> Result<u32> {
        self.state = SessionState::new(num_hands);
        while self.state.hands_remaining > 0 {
            self.play_round()?;
        }
        self.console.write_line(&format!(
            "Total score over all hands is: {}",
            self.state.total_score
        ))?;
        Ok(self.state.total_score)
    }

    /// One round: deal, offer the one-shot substitution, play the
    /// hand, offer the one-shot replay.
    ///
    /// A replayed round starts over from the hand as it stood before
    /// the first play, contributes the better of the two scores, and
    /// does not count against the requested number of hands. The
    /// substitution is only offered while the replay is also still
    /// available; a replayed hand is played as it stands.
    fn play_round(&mut self) -> Result<()> {
        let mut hand = Hand::deal(self.hand_size, self.rng);
        self.console.write_line("")?;
        self.console.write_line(&format!("Current Hand: {}", hand))?;

        if !self.state.substitution_used
            && !self.state.replay_used
            && self.confirm("Would you like to substitute a letter? ")?
        {
            let reply = self
                .console
                .read_line("Which letter would you like to replace: ")?;
            if let Some(letter) = reply.trim().chars().next() {
                log::debug!("substituting letter {:?}", letter);
                hand = hand.substitute(letter, self.rng);
            }
            // the option is spent once the offer is accepted, even for
            // a letter the hand does not hold
            self.state.substitution_used = true;
        }

        let snapshot = hand.clone();
        let mut first = HandSession::new(hand);
        let score1 = first.run(self.dictionary, self.console)?;
        self.report_hand_total(score1)?;

        if !self.state.replay_used && self.confirm("Would you like to replay the hand? ")? {
            self.state.replay_used = true;
            let mut second = HandSession::new(snapshot);
            let score2 = second.run(self.dictionary, self.console)?;
            self.report_hand_total(score2)?;
            self.state.total_score += score1.max(score2);
        } else {
            self.state.total_score += score1;
            self.state.hands_remaining -= 1;
        }
        Ok(())
    }

    fn report_hand_total(&mut self, score: u32) -> Result<()> {
        self.console.write_line("")?;
        self.console
            .write_line(&format!("Total score for this hand: {}", score))?;
        self.console.write_line("----------")?;
        Ok(())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let reply = self.console.read_line(prompt)?;
        let reply = reply.trim().to_lowercase();
        Ok(reply == "yes" || reply == "y")
    }
}

/// Ask for the number of hands to play, re-asking until a positive
/// whole number is entered.
pub fn prompt_hand_count<C: Console>(console: &mut C) -> Result<u32> {
    loop {
        let reply = console.read_line("Enter total number of hands: ")?;
        match reply.trim().parse::<u32>() {
            Ok(n) if n > 0 => return Ok(n),
            _ => console.write_line("Please enter a positive whole number.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dict() -> Dictionary {
        Dictionary::from_iter(["cat", "at"])
    }

    fn hand_of(letters: &str) -> Hand {
        letters.chars().collect()
    }

    fn run_game(
        dictionary: &Dictionary,
        console: &mut ScriptedConsole,
        seed: u64,
        hand_size: usize,
        hands: u32,
    ) -> u32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = GameSession::new(dictionary, console, &mut rng, hand_size);
        session.run(hands).unwrap()
    }

    #[test]
    fn test_hand_scores_and_runs_out_of_letters() {
        let mut console = ScriptedConsole::new(["cat"]);
        let mut session = HandSession::new(hand_of("cat"));
        let score = session.run(&dict(), &mut console).unwrap();
        assert_eq!(score, 105);
        assert_eq!(session.state(), HandState::FinishedExhausted);
        assert!(session.hand().is_empty());
        assert!(console
            .output
            .contains(&"\"cat\" earned 105 points. Total: 105 points".to_string()));
        assert!(console
            .output
            .contains(&"Ran out of letters. Total score: 105 points".to_string()));
    }

    #[test]
    fn test_quit_sentinel_ends_the_hand_without_consuming() {
        let mut console = ScriptedConsole::new(["!!"]);
        let mut session = HandSession::new(hand_of("cat"));
        let score = session.run(&dict(), &mut console).unwrap();
        assert_eq!(score, 0);
        assert_eq!(session.state(), HandState::FinishedQuit);
        assert_eq!(session.hand(), &hand_of("cat"));
        assert!(console
            .output
            .contains(&"Total score: 0".to_string()));
    }

    #[test]
    fn test_invalid_word_scores_nothing_but_consumes() {
        // "tca" is not a word, but it still spends the hand's letters
        let mut console = ScriptedConsole::new(["tca"]);
        let mut session = HandSession::new(hand_of("cat"));
        let score = session.run(&dict(), &mut console).unwrap();
        assert_eq!(score, 0);
        assert_eq!(session.state(), HandState::FinishedExhausted);
        assert!(console
            .output
            .contains(&"That is not a valid word. Please choose another word.".to_string()));
    }

    #[test]
    fn test_bonus_uses_the_hand_length_at_play_time() {
        // c a2 t2: "xyz" misses and consumes nothing, "cat" plays at
        // N=3 for 105, "at" plays at N=2 for 28
        let mut console = ScriptedConsole::new(["xyz", "cat", "at"]);
        let mut session = HandSession::new(hand_of("catat"));
        let score = session.run(&dict(), &mut console).unwrap();
        assert_eq!(score, 133);
        assert_eq!(session.state(), HandState::FinishedExhausted);
    }

    #[test]
    fn test_wildcard_word_plays_through_the_hand() {
        let dictionary = Dictionary::from_iter(["cat"]);
        let mut console = ScriptedConsole::new(["c*t"]);
        let mut session = HandSession::new(hand_of("c*t"));
        let score = session.run(&dictionary, &mut console).unwrap();
        assert_eq!(score, 84);
        assert_eq!(session.state(), HandState::FinishedExhausted);
    }

    #[test]
    fn test_empty_deal_finishes_immediately() {
        let mut console = ScriptedConsole::new([]);
        let mut session = HandSession::new(Hand::default());
        let score = session.run(&dict(), &mut console).unwrap();
        assert_eq!(score, 0);
        assert_eq!(session.state(), HandState::FinishedExhausted);
    }

    #[test]
    fn test_game_reports_the_grand_total() {
        let mut console = ScriptedConsole::new(["no", "!!", "no"]);
        let total = run_game(&dict(), &mut console, 1, 7, 1);
        assert_eq!(total, 0);
        assert!(console.exhausted());
        assert_eq!(
            console.output.last().unwrap(),
            "Total score over all hands is: 0"
        );
    }

    #[test]
    fn test_substitution_is_offered_once() {
        // round one accepts the offer; round two must not see it, and
        // the script only lines up if it is skipped
        let mut console = ScriptedConsole::new(["yes", "1", "!!", "no", "!!", "no"]);
        let total = run_game(&dict(), &mut console, 2, 7, 2);
        assert_eq!(total, 0);
        assert!(console.exhausted());
        let offers = console
            .prompts
            .iter()
            .filter(|p| p.starts_with("Would you like to substitute"))
            .count();
        assert_eq!(offers, 1);
    }

    #[test]
    fn test_replayed_round_does_not_spend_a_hand() {
        // replaying keeps hands-remaining where it was, so a second
        // round is dealt even though only one hand was requested
        let mut console = ScriptedConsole::new(["no", "!!", "yes", "!!", "!!"]);
        let total = run_game(&dict(), &mut console, 3, 7, 1);
        assert_eq!(total, 0);
        assert!(console.exhausted());
        let replays = console
            .prompts
            .iter()
            .filter(|p| p.starts_with("Would you like to replay"))
            .count();
        assert_eq!(replays, 1);
    }

    #[test]
    fn test_replay_keeps_the_better_score() {
        let dictionary = Dictionary::from_iter(["cat"]);
        let mut peek_rng = StdRng::seed_from_u64(42);
        let peek = Hand::deal(7, &mut peek_rng);
        let expected = word_score("c*t", peek.len()).unwrap();

        // quit the first play for zero, then score on the replay; the
        // wildcard word plays whatever letters were dealt
        let mut console = ScriptedConsole::new(["no", "!!", "yes", "c*t", "!!", "!!"]);
        let total = run_game(&dictionary, &mut console, 42, 7, 1);
        assert_eq!(total, expected);
        assert!(console.exhausted());
    }

    #[test]
    fn test_replay_restarts_from_the_dealt_hand() {
        let mut peek_rng = StdRng::seed_from_u64(9);
        let peek = Hand::deal(7, &mut peek_rng);
        let echo = format!("Current Hand: {}", peek);

        let mut console = ScriptedConsole::new(["no", "!!", "yes", "!!", "!!"]);
        let _ = run_game(&dict(), &mut console, 9, 7, 1);
        // dealt once, shown at the top of the round and at the start
        // of both plays
        let echoes = console.output.iter().filter(|line| **line == echo).count();
        assert_eq!(echoes, 3);
    }

    #[test]
    fn test_declined_replay_spends_the_hand() {
        let mut console = ScriptedConsole::new(["no", "!!", "no", "no", "!!", "no"]);
        let total = run_game(&dict(), &mut console, 5, 7, 2);
        assert_eq!(total, 0);
        assert!(console.exhausted());
    }

    #[test]
    fn test_prompt_hand_count_reasks_until_positive() {
        let mut console = ScriptedConsole::new(["three", "0", "3"]);
        let n = prompt_hand_count(&mut console).unwrap();
        assert_eq!(n, 3);
        assert_eq!(console.prompts.len(), 3);
        assert_eq!(
            console.output,
            vec![
                "Please enter a positive whole number.",
                "Please enter a positive whole number."
            ]
        );
    }
}

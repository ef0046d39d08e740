//! Countdown scoring session.
//!
//! Idle -> Running -> Ended. Enter starts a session whenever one is not
//! already running, so Ended can go back to Running.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Idle,
    Running,
    Ended,
}

/// Outcome of a one-second timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Timer fired outside a running session
    Ignored,
    /// Time decremented, session still running
    Tick { time_remaining: u32 },
    /// Time reached zero on this tick
    Ended { final_score: u32 },
}

#[derive(Debug, Clone)]
pub struct Session {
    phase: SessionPhase,
    score: u32,
    time_remaining: u32,
    duration_secs: u32,
    /// Incremented on every start, so a runner can tell sessions apart.
    generation: u32,
}

impl Session {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            phase: SessionPhase::Idle,
            score: 0,
            time_remaining: duration_secs,
            duration_secs,
            generation: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Enter pressed. Starts (or restarts from Ended) with a fresh score and
    /// full timer. Returns false if a session is already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = SessionPhase::Running;
        self.score = 0;
        self.time_remaining = self.duration_secs;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    /// One-second timer callback.
    pub fn tick_second(&mut self) -> SessionEvent {
        if !self.is_running() {
            return SessionEvent::Ignored;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.phase = SessionPhase::Ended;
            return SessionEvent::Ended {
                final_score: self.score,
            };
        }
        SessionEvent::Tick {
            time_remaining: self.time_remaining,
        }
    }

    /// Add one point per contact. Contacts outside a running session are dropped.
    /// Returns the number of points awarded.
    pub fn record_contacts(&mut self, contacts: u32) -> u32 {
        if !self.is_running() {
            return 0;
        }
        self.score = self.score.saturating_add(contacts);
        contacts
    }

    pub fn score_text(&self) -> String {
        format!("Points: {}", self.score)
    }

    pub fn timer_text(&self) -> String {
        match self.phase {
            SessionPhase::Ended => format!("Game Over! Final Score: {}", self.score),
            SessionPhase::Idle | SessionPhase::Running => {
                format!("Time left: {}s", self.time_remaining)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> Session {
        let mut s = Session::new(30);
        assert!(s.start());
        s
    }

    mod transitions {
        use super::*;

        #[test]
        fn starts_idle_with_full_timer() {
            let s = Session::new(30);
            assert_eq!(s.phase(), SessionPhase::Idle);
            assert_eq!(s.score(), 0);
            assert_eq!(s.time_remaining(), 30);
        }

        #[test]
        fn start_from_idle_runs() {
            let s = running();
            assert_eq!(s.phase(), SessionPhase::Running);
            assert_eq!(s.generation(), 1);
        }

        #[test]
        fn start_while_running_is_rejected() {
            let mut s = running();
            s.record_contacts(3);
            s.tick_second();
            assert!(!s.start());
            assert_eq!(s.score(), 3);
            assert_eq!(s.time_remaining(), 29);
            assert_eq!(s.generation(), 1);
        }

        #[test]
        fn ends_after_exactly_duration_ticks() {
            let mut s = running();
            for i in 1..30 {
                assert_eq!(
                    s.tick_second(),
                    SessionEvent::Tick {
                        time_remaining: 30 - i
                    }
                );
                assert!(s.is_running());
            }
            assert_eq!(s.tick_second(), SessionEvent::Ended { final_score: 0 });
            assert_eq!(s.phase(), SessionPhase::Ended);
            assert_eq!(s.time_remaining(), 0);
        }

        #[test]
        fn ticks_after_end_are_ignored() {
            let mut s = Session::new(1);
            s.start();
            assert_eq!(s.tick_second(), SessionEvent::Ended { final_score: 0 });
            assert_eq!(s.tick_second(), SessionEvent::Ignored);
            assert_eq!(s.time_remaining(), 0);
        }

        #[test]
        fn ticks_while_idle_are_ignored() {
            let mut s = Session::new(30);
            assert_eq!(s.tick_second(), SessionEvent::Ignored);
            assert_eq!(s.time_remaining(), 30);
        }

        #[test]
        fn restart_from_ended_resets_score_and_timer() {
            let mut s = Session::new(2);
            s.start();
            s.record_contacts(7);
            s.tick_second();
            s.tick_second();
            assert_eq!(s.phase(), SessionPhase::Ended);

            assert!(s.start());
            assert_eq!(s.phase(), SessionPhase::Running);
            assert_eq!(s.score(), 0);
            assert_eq!(s.time_remaining(), 2);
            assert_eq!(s.generation(), 2);
        }
    }

    mod scoring {
        use super::*;

        #[test]
        fn contacts_while_idle_do_not_score() {
            let mut s = Session::new(30);
            assert_eq!(s.record_contacts(4), 0);
            assert_eq!(s.score(), 0);
        }

        #[test]
        fn contacts_while_running_score_each() {
            let mut s = running();
            assert_eq!(s.record_contacts(2), 2);
            assert_eq!(s.record_contacts(1), 1);
            assert_eq!(s.score(), 3);
        }

        #[test]
        fn contacts_after_end_do_not_score() {
            let mut s = Session::new(1);
            s.start();
            s.record_contacts(5);
            s.tick_second();
            assert_eq!(s.record_contacts(9), 0);
            assert_eq!(s.score(), 5);
        }

        #[test]
        fn ended_event_reports_final_score() {
            let mut s = Session::new(1);
            s.start();
            s.record_contacts(12);
            assert_eq!(s.tick_second(), SessionEvent::Ended { final_score: 12 });
        }
    }

    mod display {
        use super::*;

        #[test]
        fn texts_while_running() {
            let mut s = running();
            s.record_contacts(4);
            s.tick_second();
            assert_eq!(s.score_text(), "Points: 4");
            assert_eq!(s.timer_text(), "Time left: 29s");
        }

        #[test]
        fn idle_shows_full_timer() {
            let s = Session::new(30);
            assert_eq!(s.score_text(), "Points: 0");
            assert_eq!(s.timer_text(), "Time left: 30s");
        }

        #[test]
        fn game_over_text() {
            let mut s = Session::new(1);
            s.start();
            s.record_contacts(8);
            s.tick_second();
            assert_eq!(s.timer_text(), "Game Over! Final Score: 8");
        }
    }
}

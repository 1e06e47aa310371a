use crate::error::{Error, Result};
use std::ops::Range;

/// Keyword that stops paging early.
const EXIT_KEYWORD: &str = "exit";

/// How a finished pager ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every page was shown.
    Completed,
    /// The user typed the exit keyword.
    ExitRequested,
}

/// Pager control states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// A page starting at `offset` is due to be rendered.
    Showing { offset: usize },
    /// The page was rendered; waiting for the user's decision.
    AwaitingInput { offset: usize },
    Finished(Termination),
}

/// Fixed-size pagination state machine over an ordered row list.
///
/// The pager never touches a terminal. Callers render the range returned
/// by [`Pager::page`], acknowledge with [`Pager::page_shown`], and feed
/// the user's reply to [`Pager::feed_line`].
#[derive(Debug)]
pub struct Pager {
    row_count: usize,
    page_size: usize,
    state: PagerState,
}

impl Pager {
    pub fn new(row_count: usize, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize);
        }

        let state = if row_count == 0 {
            PagerState::Finished(Termination::Completed)
        } else {
            PagerState::Showing { offset: 0 }
        };

        Ok(Self {
            row_count,
            page_size,
            state,
        })
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Row range of the current page, when one is due to be rendered.
    pub fn page(&self) -> Option<Range<usize>> {
        match self.state {
            PagerState::Showing { offset } => {
                Some(offset..(offset + self.page_size).min(self.row_count))
            }
            _ => None,
        }
    }

    /// Mark the current page as rendered.
    pub fn page_shown(&mut self) {
        if let PagerState::Showing { offset } = self.state {
            self.state = PagerState::AwaitingInput { offset };
        }
    }

    /// Apply one line of user input to a waiting pager. The exit keyword
    /// (trimmed, case-insensitive) finishes early; anything else,
    /// including an empty line, advances to the next page.
    pub fn feed_line(&mut self, line: &str) {
        let PagerState::AwaitingInput { offset } = self.state else {
            return;
        };

        if line.trim().eq_ignore_ascii_case(EXIT_KEYWORD) {
            self.state = PagerState::Finished(Termination::ExitRequested);
            return;
        }

        let next = offset + self.page_size;
        self.state = if next >= self.row_count {
            PagerState::Finished(Termination::Completed)
        } else {
            PagerState::Showing { offset: next }
        };
    }
}

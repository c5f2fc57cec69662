use crate::ports::input_reader::{
    InputError, InputReader as InputReaderTrait, Result, parse_int_token,
};
use std::collections::VecDeque;

/// Mock implementation of InputReader
///
/// Hands out a fixed list of tokens in order and records every prompt shown,
/// so tests can assert on the conversation without a console.
#[derive(Debug, Default)]
pub struct InputReader {
    tokens: VecDeque<String>,
    prompts: Vec<String>,
}

impl InputReader {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Number of tokens not consumed yet
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    fn next_token(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.tokens.pop_front().ok_or(InputError::EndOfInput)
    }
}

impl InputReaderTrait for InputReader {
    fn read_int(&mut self, prompt: &str) -> Result<i32> {
        parse_int_token(self.next_token(prompt)?)
    }

    fn read_string(&mut self, prompt: &str) -> Result<String> {
        self.next_token(prompt)
    }
}

use crate::ports::input_reader::{
    InputError, InputReader as InputReaderTrait, Result, parse_int_token,
};
use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// コンソール入力の実装
///
/// 空白区切りのトークン単位で読み取る。1行に複数の値を入力した場合、
/// 残りのトークンは次の読み取りで使われる。
/// 破棄（Drop）時に入力ソースを解放する。
pub struct InputReader<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        tracing::debug!("console input reader acquired");
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<()> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::EndOfInput);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl InputReader<StdinLock<'static>, Stdout> {
    /// 標準入力と標準出力に接続する
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputReaderTrait for InputReader<R, W> {
    fn read_int(&mut self, prompt: &str) -> Result<i32> {
        self.prompt(prompt)?;
        parse_int_token(self.next_token()?)
    }

    fn read_string(&mut self, prompt: &str) -> Result<String> {
        self.prompt(prompt)?;
        self.next_token()
    }
}

impl<R, W> Drop for InputReader<R, W> {
    fn drop(&mut self) {
        tracing::debug!(
            unread_tokens = self.pending.len(),
            "console input reader released"
        );
    }
}

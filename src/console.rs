use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::Path;

use crate::constants::*;
use crate::types::CurrencyProfile;

/// The interactive surface: narration out, whitespace-separated answers in.
pub trait Prompt {
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Prints `question` and returns the next input token.
    fn ask(&mut self, question: &str) -> io::Result<String>;

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self.ask(question)? == "y")
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, pending: VecDeque::new() }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn next_token(&mut self) -> io::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed while waiting for an answer"));
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;
        self.next_token()
    }
}

const LICENSE: &[&str] = &[
    "------------------------------------ LICENSE ------------------------------------",
    "| THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR    |",
    "| IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,      |",
    "| FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE   |",
    "| AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER        |",
    "| LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, |",
    "| OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE |",
    "| SOFTWARE.                                                                     |",
    "---------------------------------------------------------------------------------",
    "",
];

const WARNING: &[&str] = &[
    "       --------------------------*** WARNING ***--------------------------",
    "       | This software produces unencrypted cryptocurrency private keys. |",
    "       | Knowledge of a private key associated to a balance grants the   |",
    "       | ability to create transactions using that balance.              |",
    "       |                                                                 |",
    "       | DO NOT send a balance to the keys generated by this software    |",
    "       | if you do not understand the risks.                             |",
    "       -------------------------------------------------------------------",
    "",
];

/// Prints the license summary and key-handling warning. Returns whether the user agreed.
pub fn show_disclaimer(prompt: &mut impl Prompt) -> io::Result<bool> {
    for line in LICENSE.iter().chain(WARNING) {
        prompt.say(line)?;
    }
    prompt.confirm("Ready to proceed? (y/N)")
}

pub fn invalid_selection(selected: &str) -> String {
    format!("Selected {}; invalid selection.", selected)
}

/// Re-prompts until a listed menu index is entered.
pub fn select_currency(prompt: &mut impl Prompt) -> io::Result<CurrencyProfile> {
    loop {
        prompt.say("Supported crypto-currency types:")?;
        for (i, profile) in CurrencyProfile::ALL.iter().enumerate() {
            prompt.say(&format!(" {}. {}", i, profile.abbreviation()))?;
        }
        let answer = prompt.ask("Which crypto?")?;
        let Ok(selection) = answer.parse::<i64>() else {
            prompt.say(&invalid_selection("non-numeric"))?;
            continue;
        };
        match usize::try_from(selection).ok().and_then(CurrencyProfile::from_index) {
            Some(profile) => {
                prompt.say(&format!("Selected {}", profile))?;
                return Ok(profile);
            }
            None => prompt.say(&invalid_selection(&selection.to_string()))?,
        }
    }
}

pub fn ask_key_count(prompt: &mut impl Prompt) -> io::Result<usize> {
    loop {
        let answer = prompt.ask("How many addresses to generate?")?;
        let Ok(count) = answer.parse::<i64>() else {
            prompt.say(&invalid_selection("non-numeric"))?;
            continue;
        };
        match usize::try_from(count) {
            Ok(count) if (1..=KEY_COUNT_MAX).contains(&count) => return Ok(count),
            _ => prompt.say(&format!("{} Enter a count between 1 and {}.", invalid_selection(&count.to_string()), KEY_COUNT_MAX))?,
        }
    }
}

pub fn ask_file_name(prompt: &mut impl Prompt) -> io::Result<String> {
    prompt.ask("Name for file (e.g. \"my-keys\")?")
}

pub fn confirm_overwrite(prompt: &mut impl Prompt, path: &Path) -> io::Result<bool> {
    prompt.confirm(&format!("File {} already exists, overwrite? (y/N)", path.display()))
}

/// Prints a symmetric OpenPGP encryption example for the generated file.
pub fn show_encryption_hint(prompt: &mut impl Prompt, path: &Path) -> io::Result<()> {
    prompt.say("")?;
    prompt.say("The following is an encryption example WITHOUT ANY WARRANTY, that uses")?;
    prompt.say("an implementation of OpenPGP to encrypt the generated file.")?;
    prompt.say("Encrypt:")?;
    prompt.say(&format!("  gpg --armor --symmetric --cipher-algo AES256 --s2k-digest-algo SHA512 --s2k-count 65011712 {}", path.display()))?;
    prompt.say("Decrypt:")?;
    prompt.say(&format!("  gpg -d {}.asc", path.display()))
}

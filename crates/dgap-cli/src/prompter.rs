//! Interactive parameter entry

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use dgap::{MAX_BASE, MIN_BASE, SearchParams, Wide};

/// Reads search parameters line by line, re-asking on invalid input
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input ended before all parameters were entered");
        }
        Ok(line.trim().to_string())
    }

    fn retry(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Ask for a number accepted by `valid`
    fn ask_u32(&mut self, prompt: &str, valid: impl Fn(u32) -> bool) -> Result<u32> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<u32>() {
                Ok(n) if valid(n) => return Ok(n),
                _ => self.retry("Invalid number, please try again")?,
            }
        }
    }

    /// Ask for a value where `sentinel` stands for "not set"
    fn ask_optional_wide(&mut self, prompt: &str, sentinel: &str) -> Result<Option<Wide>> {
        loop {
            let line = self.read_line(prompt)?;
            if line == sentinel {
                return Ok(None);
            }
            match line.parse::<Wide>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.retry("Invalid number, please try again")?,
            }
        }
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let line = self.read_line(prompt)?;
            match line.as_str() {
                "y" | "Y" => return Ok(true),
                "n" | "N" => return Ok(false),
                _ => self.retry("Please answer y or n")?,
            }
        }
    }

    /// Walk through every parameter of a search.
    ///
    /// A minimum of `0` and a maximum of `-1` leave the digit-length bound
    /// in place; a result count of `-1` reports everything.
    pub fn collect_params(&mut self) -> Result<SearchParams> {
        let base = self.ask_u32(
            &format!("Base b ({}-{}): ", MIN_BASE, MAX_BASE),
            |b| (MIN_BASE..=MAX_BASE).contains(&b),
        )?;
        let n = self.ask_u32("Digit length n of x: ", |n| n >= 1)?;
        let m = self.ask_u32("Digit length m of y (N = b^m): ", |m| m >= 1)?;

        let mut builder = SearchParams::builder()
            .base(base)
            .digits(n)
            .modulus_digits(m);

        if self.ask_yes_no("Restrict the range of x? (y/n): ")? {
            let min_x = self.ask_optional_wide("Minimum x (0 for the digit minimum): ", "0")?;
            if let Some(min_x) = min_x {
                builder = builder.min_x(min_x);
            }
            let max_x = self.ask_optional_wide("Maximum x (-1 for the digit maximum): ", "-1")?;
            if let Some(max_x) = max_x {
                builder = builder.max_x(max_x);
            }
        }

        let limit = self.ask_optional_wide("Maximum number of results (-1 for all): ", "-1")?;
        if let Some(limit) = limit {
            let limit = usize::try_from(limit.get()).unwrap_or(usize::MAX);
            builder = builder.max_results(limit);
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str) -> (Result<SearchParams>, String) {
        let mut output = Vec::new();
        let result = Prompter::new(Cursor::new(input), &mut output).collect_params();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_collect_params_without_range() {
        let (params, _) = collect("16\n2\n4\nn\n-1\n");
        let params = params.unwrap();
        assert_eq!(params.base, 16);
        assert_eq!(params.n, 2);
        assert_eq!(params.m, 4);
        assert_eq!(params.min_x, Wide::ZERO);
        assert_eq!(params.max_x, None);
        assert_eq!(params.max_results, None);
    }

    #[test]
    fn test_collect_params_with_range_and_limit() {
        let (params, _) = collect("10\n2\n2\ny\n15\n34\n3\n");
        let params = params.unwrap();
        assert_eq!(params.min_x, Wide::new(15));
        assert_eq!(params.max_x, Some(Wide::new(34)));
        assert_eq!(params.max_results, Some(3));
    }

    #[test]
    fn test_collect_params_digit_bound_sentinels() {
        let (params, _) = collect("10\n2\n2\nY\n0\n-1\n-1\n");
        let params = params.unwrap();
        assert_eq!(params.min_x, Wide::ZERO);
        assert_eq!(params.max_x, None);
    }

    #[test]
    fn test_collect_params_reasks_invalid_input() {
        let (params, output) = collect("1\nabc\n10\n0\n1\n2\nmaybe\nn\n-5\n-1\n");
        let params = params.unwrap();
        assert_eq!(params.base, 10);
        assert_eq!(params.n, 1);
        assert_eq!(params.m, 2);
        assert_eq!(output.matches("Invalid number").count(), 4);
        assert_eq!(output.matches("Please answer y or n").count(), 1);
    }

    #[test]
    fn test_collect_params_eof() {
        let (params, _) = collect("10\n1\n");
        assert!(params.is_err());
    }
}

// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use regex::Regex;
use std::sync::OnceLock;

static WHITESPACE: OnceLock<Regex> = OnceLock::new();

/// Collapses every maximal run of whitespace to a single space and trims
/// leading and trailing whitespace.
///
/// # Examples
///
/// ```rust
/// # use numutil::utils::text::collapse;
///
/// assert_eq!(collapse("\n  foo\t\nbar  \t "), "foo bar");
/// ```
pub fn collapse(str: &str) -> String {
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").unwrap());
    re.replace_all(str, " ").trim().to_string()
}

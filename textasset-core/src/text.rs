// Copyright 2026 The Textasset Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Line-oriented decoding of asset bytes into a single trimmed string.

use std::io::{self, BufRead};

const INITIAL_BUFFER_CAPACITY: usize = 4 * 1024;

/// read_joined_lines drains `reader` line by line and returns the lines
/// joined with `\n`, trimmed at both ends.
///
/// Lines end at `\n`, `\r` or `\r\n`. Invalid UTF-8 is replaced with U+FFFD.
pub fn read_joined_lines<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut out = String::with_capacity(INITIAL_BUFFER_CAPACITY);
    let mut chunk = Vec::with_capacity(256);

    loop {
        chunk.clear();
        if reader.read_until(b'\n', &mut chunk)? == 0 {
            break;
        }
        push_lines(&mut out, &chunk);
    }

    Ok(trim(&out).to_owned())
}

/// push_lines appends every line in `chunk` to `out`, each followed by `\n`.
/// `chunk` holds everything up to and including one `\n`, or the tail of
/// the stream.
fn push_lines(out: &mut String, chunk: &[u8]) {
    let mut body = chunk;
    if let Some(rest) = body.strip_suffix(b"\n") {
        body = rest.strip_suffix(b"\r").unwrap_or(rest);
    } else if let Some(rest) = body.strip_suffix(b"\r") {
        body = rest;
    }

    // a lone '\r' inside the body also terminates a line
    for line in body.split(|&b| b == b'\r') {
        out.push_str(&String::from_utf8_lossy(line));
        out.push('\n');
    }
}

/// trim strips every character at or below U+0020 from both ends of `s`.
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

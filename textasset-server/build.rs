// Copyright 2026 The Textasset Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

fn main() {
    built::write_built_file().expect("failed to acquire build-time information");
}

/*
 * Copyright 2026 Narative Studio Inc.
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

pub mod Container;
pub mod Forms;
pub mod Logo;
pub mod Switcher;
pub mod WaveVideo;

pub use Container::*;
pub use Forms::*;
pub use Logo::*;
pub use Switcher::*;
pub use WaveVideo::*;

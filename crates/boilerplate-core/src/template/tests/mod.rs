//! Tests for the template engine, split by concern

use super::*;
use crate::params::ParameterDictionary;

mod helpers;

mod render_basic;

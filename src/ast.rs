/*
 * ==========================================================================
 * FNSPEC - Signatures with Claws!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/fnspec
 *
 * License:
 * This file is part of the FNSPEC function notation project.
 *
 * FNSPEC is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fmt;

use serde::{Deserialize, Serialize};

/// One parameter of a function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,

    /// Default value text, verbatim from the declaration. `None` means the
    /// parameter is required.
    pub default: Option<String>,
}

impl ParameterSpec {
    /// A parameter without a default value.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// A parameter with a default value.
    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }
}

impl fmt::Display for ParameterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.default {
            Some(default) => write!(f, "{}={}", self.name, default),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A parsed function declaration: name plus ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<ParameterSpec>,
}

impl FunctionDeclaration {
    pub fn new(name: impl Into<String>, parameters: Vec<ParameterSpec>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    /// Looks up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

impl fmt::Display for FunctionDeclaration {
    /// Canonical form: `name(a, b=2)`. One space after each comma, no
    /// spaces around `=`. Parsing the output reproduces the declaration.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;

        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", parameter)?;
        }

        write!(f, ")")
    }
}

/// One argument of a function call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallArgument {
    /// `None` for a positional argument, `Some` once bound to a name.
    pub name: Option<String>,

    /// Argument value text, verbatim (quoted strings keep their quotes).
    pub value: String,
}

impl CallArgument {
    /// An argument supplied by position.
    pub fn positional(value: impl Into<String>) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }

    /// An argument supplied (or bound) by name.
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }
}

impl fmt::Display for CallArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}={}", name, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// A parsed function call: name plus ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Vec<CallArgument>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, arguments: Vec<CallArgument>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

impl fmt::Display for FunctionCall {
    /// Canonical form: `name(1, b=2)`. One space after each comma, no
    /// spaces around `=`. Parsing the output reproduces the call.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;

        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", argument)?;
        }

        write!(f, ")")
    }
}

/*
 * ==========================================================================
 * FNSPEC - Signatures with Claws!
 * ==========================================================================
 *
 * Declaration Registry & Call Reconciler
 * --------------------------------------
 * Final stage of the FNSPEC pipeline. The reconciler normalizes a parsed
 * call against its declaration:
 *
 *  - positional arguments are bound to the declaration parameter at the
 *    same index and become named arguments;
 *  - parameters with defaults that the call left unbound are appended, in
 *    declaration order, with their default values.
 *
 * The registry is a keyed store of declarations, so callers can resolve
 * calls by function name alone.
 *
 * --------------------------------------------------------------------------
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

use std::collections::{HashMap, HashSet};

use crate::ast::{CallArgument, FunctionCall, FunctionDeclaration};
use crate::error::{FnspecError, Result};
use crate::parser::parse_declaration;

/// Normalizes a call against its declaration.
///
/// # Parameters
/// - `declaration`: The declaration the call is resolved against.
/// - `call`: The call to normalize. Left untouched; the result is a new
///   value.
///
/// # Behavior
/// The call and declaration names must match. Positional arguments are
/// bound to the declaration parameter at the same index. Parameters with
/// defaults that remain unbound afterwards are appended in declaration
/// order. Original argument order is preserved, argument values are never
/// touched, and named arguments unknown to the declaration pass through
/// unchanged. Normalizing an already-normalized call returns it as-is.
///
/// # Errors
/// - `E_UNKNOWN_FUNCTION` when the call and declaration names differ.
/// - `E_ARITY` when the call has more positional arguments than the
///   declaration has parameters.
pub fn normalize(declaration: &FunctionDeclaration, call: &FunctionCall) -> Result<FunctionCall> {
    if call.name != declaration.name {
        return Err(FnspecError::declaration_mismatch(
            &call.name,
            &declaration.name,
        ));
    }

    let positional = call
        .arguments
        .iter()
        .filter(|argument| argument.name.is_none())
        .count();

    let mut normalized = call.clone();

    // Every name bound so far: explicit named arguments up front, then
    // positional bindings as they are made. Default filling consults the
    // complete set, so a positionally-bound parameter never receives its
    // default a second time.
    let mut bound: HashSet<String> = call
        .arguments
        .iter()
        .filter_map(|argument| argument.name.clone())
        .collect();

    for (i, argument) in normalized.arguments.iter_mut().enumerate() {
        if argument.name.is_some() {
            continue;
        }

        let parameter = declaration.parameters.get(i).ok_or_else(|| {
            FnspecError::arity_error(&call.name, positional, declaration.parameters.len())
        })?;

        argument.name = Some(parameter.name.clone());
        bound.insert(parameter.name.clone());
    }

    for parameter in &declaration.parameters {
        let default = match &parameter.default {
            Some(default) => default,
            None => continue,
        };

        if !bound.contains(&parameter.name) {
            normalized
                .arguments
                .push(CallArgument::named(parameter.name.clone(), default.clone()));
        }
    }

    Ok(normalized)
}

/// A keyed store of function declarations.
///
/// The registry exclusively owns its declarations; lookups hand out clones.
/// The type is plain owned data, so sharing across threads is the caller's
/// choice of wrapper (`RwLock`, `Mutex`).
#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) functions: HashMap<String, FunctionDeclaration>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a declaration and registers it under its own name.
    ///
    /// Re-registering a name replaces the previous declaration. Use
    /// [`Registry::add_strict`] to reject duplicates instead.
    ///
    /// # Returns
    /// The registered function name.
    ///
    /// # Errors
    /// `E_SYNTAX` when the declaration text does not parse.
    pub fn add(&mut self, declaration_text: &str) -> Result<String> {
        let declaration = parse_declaration(declaration_text)?;
        let name = declaration.name.clone();
        self.functions.insert(name.clone(), declaration);

        Ok(name)
    }

    /// Like [`Registry::add`], but fails if the name is already registered.
    ///
    /// # Errors
    /// `E_SYNTAX` when the declaration text does not parse, `E_DUPLICATE`
    /// when the name is already present (the stored declaration is kept).
    pub fn add_strict(&mut self, declaration_text: &str) -> Result<String> {
        let declaration = parse_declaration(declaration_text)?;
        if self.functions.contains_key(&declaration.name) {
            return Err(FnspecError::duplicate_function(&declaration.name));
        }

        let name = declaration.name.clone();
        self.functions.insert(name.clone(), declaration);

        Ok(name)
    }

    /// Removes a declaration. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.functions.remove(name).is_some()
    }

    /// Fetches a clone of the declaration registered under `name`.
    ///
    /// # Errors
    /// `E_UNKNOWN_FUNCTION` when no such declaration exists.
    pub fn lookup(&self, name: &str) -> Result<FunctionDeclaration> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| FnspecError::unknown_function(name))
    }

    /// Normalizes a call against the declaration registered under the
    /// call's name. See [`normalize`].
    ///
    /// # Errors
    /// `E_UNKNOWN_FUNCTION` when the call's function is not registered,
    /// plus everything `normalize` can return.
    pub fn normalize_call(&self, call: &FunctionCall) -> Result<FunctionCall> {
        let declaration = self
            .functions
            .get(&call.name)
            .ok_or_else(|| FnspecError::unknown_function(&call.name))?;

        normalize(declaration, call)
    }

    /// Number of registered declarations.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();

        names
    }
}

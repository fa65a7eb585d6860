//! The parameter table and its typed access surface.
//!
//! A [`ParamParser`] only exists inside [`ParamParser::scope`]. There it is
//! loaded once from the process arguments, read through [`ParamParser::get`]
//! and [`ParamParser::get_default`], and finalized once when the scope ends
//! successfully, at which point every parameter that was never read is
//! reported as unused.

use std::fmt::Display;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::alert::Alerts;
use crate::convert::ParamValue;
use crate::error::{Error, Result};
use crate::identifier::{is_seed_token, is_valid_identifier};
use crate::preprocess::Preprocessor;
use crate::validate::{validate_all, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unloaded,
    Loaded,
    Finalized,
}

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    last_type: String,
    /// 1-based position in the argument list.
    index: usize,
    referenced: bool,
}

pub struct ParamParser {
    state: State,
    entries: IndexMap<String, Entry>,
    preprocessor: Preprocessor,
    alerts: Alerts,
}

impl ParamParser {
    fn new(alerts: Alerts) -> Self {
        Self {
            state: State::Unloaded,
            entries: IndexMap::new(),
            preprocessor: Preprocessor::new(),
            alerts,
        }
    }

    /// Creates a parser, hands it to `body` and finalizes it afterwards.
    ///
    /// The unused-parameter audit runs when `body` succeeds. When it fails,
    /// whether the error came from the parser or from the caller's own code,
    /// the failure is recorded, the error is returned untouched and the audit
    /// is skipped. A panic in `body` skips it too.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `body` or by the final audit.
    ///
    /// # Examples
    ///
    /// ```
    /// use parm_pars_core::alert::Alerts;
    /// use parm_pars_core::config::Config;
    /// use parm_pars_core::parser::ParamParser;
    /// use parm_pars_core::range::range;
    ///
    /// let alerts = Alerts::with_sink(Config::default(), std::io::sink());
    /// let n = ParamParser::scope(alerts, |params| {
    ///     params.load(["n=7"])?;
    ///     params.get::<u32>("n", &[&range(1, 10)?])
    /// })?;
    /// assert_eq!(n, 7);
    /// # Ok::<(), parm_pars_core::error::Error>(())
    /// ```
    pub fn scope<T>(
        alerts: Alerts,
        body: impl FnOnce(&mut ParamParser) -> Result<T>,
    ) -> Result<T> {
        let mut params = ParamParser::new(alerts);
        match body(&mut params) {
            Ok(value) => {
                params.finalize()?;
                Ok(value)
            }
            Err(e) => Err(params.alerts.fail(e)),
        }
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn alerts(&self) -> &Alerts {
        &self.alerts
    }

    /// Fills the table from `name=value` arguments (program name excluded).
    ///
    /// Empty arguments are skipped, and so is a final argument made only of
    /// ASCII letters and digits (a random seed).
    ///
    /// # Errors
    ///
    /// Returns an error for a second `load`, an argument without `=`, an
    /// invalid name or a name declared twice.
    pub fn load<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.state {
            State::Unloaded => {}
            State::Loaded => return Err(self.alerts.fail(Error::AlreadyLoaded)),
            State::Finalized => return Err(self.alerts.fail(Error::Finalized)),
        }

        let args: Vec<S> = args.into_iter().collect();
        let count = args.len();

        for (position, arg) in args.iter().enumerate() {
            let arg = arg.as_ref();
            let index = position + 1;

            if arg.is_empty() {
                continue;
            }

            if index == count && is_seed_token(arg) {
                debug!("Ignoring trailing token `{arg}`");
                continue;
            }

            if let Err(e) = self.insert(index, arg) {
                return Err(self.alerts.fail(e));
            }
        }

        debug!("Loaded {} parameter(s)", self.entries.len());
        self.state = State::Loaded;
        Ok(())
    }

    fn insert(&mut self, index: usize, arg: &str) -> Result<()> {
        let Some((name, value)) = arg.split_once('=') else {
            return Err(Error::MalformedArgument {
                index,
                argument: arg.to_string(),
            });
        };

        if !is_valid_identifier(name) {
            return Err(Error::InvalidName {
                index,
                name: name.to_string(),
            });
        }

        if let Some(first) = self.entries.get(name) {
            return Err(Error::DuplicateParameter {
                index,
                name: name.to_string(),
                first: first.index,
            });
        }

        self.entries.insert(
            name.to_string(),
            Entry {
                value: value.to_string(),
                last_type: "undefined".to_string(),
                index,
                referenced: false,
            },
        );
        Ok(())
    }

    fn check_loaded(&mut self) -> Result<()> {
        match self.state {
            State::Loaded => Ok(()),
            State::Unloaded => Err(self.alerts.fail(Error::NotLoaded)),
            State::Finalized => Err(self.alerts.fail(Error::Finalized)),
        }
    }

    /// Reads a required parameter as `T` and runs `validators` on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser is not loaded, `name` is absent, a
    /// macro is undefined, the value does not convert or a validator fails.
    pub fn get<T: ParamValue>(
        &mut self,
        name: &str,
        validators: &[&dyn Validator<T>],
    ) -> Result<T> {
        self.check_loaded()?;
        match self.read::<T>(name)? {
            Some(value) => {
                self.validate(name, &value, validators)?;
                Ok(value)
            }
            None => Err(self.alerts.fail(Error::UnknownParameter(name.to_string()))),
        }
    }

    /// Same as [`ParamParser::get`], storing the value in `out`.
    ///
    /// # Errors
    ///
    /// See [`ParamParser::get`].
    pub fn get_into<T: ParamValue>(
        &mut self,
        name: &str,
        out: &mut T,
        validators: &[&dyn Validator<T>],
    ) -> Result<()> {
        *out = self.get(name, validators)?;
        Ok(())
    }

    /// Reads an optional parameter, falling back to `default` when absent.
    ///
    /// The default is returned as given: it is neither macro-expanded nor
    /// validated.
    ///
    /// # Errors
    ///
    /// See [`ParamParser::get`]; a missing parameter is not an error.
    pub fn get_default<T: ParamValue>(
        &mut self,
        name: &str,
        default: T,
        validators: &[&dyn Validator<T>],
    ) -> Result<T> {
        self.check_loaded()?;
        match self.read::<T>(name)? {
            Some(value) => {
                self.validate(name, &value, validators)?;
                Ok(value)
            }
            None => {
                trace!("Parameter `{name}` is absent, using its default");
                Ok(default)
            }
        }
    }

    /// Defines a macro available to every value read afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMacroName`] if `name` is not an identifier.
    pub fn define(&mut self, name: &str, value: impl Display) -> Result<()> {
        match self.preprocessor.define(name, value.to_string()) {
            Ok(()) => Ok(()),
            Err(e) => Err(self.alerts.fail(e)),
        }
    }

    /// Expands and converts `name`, recording the read. `None` if absent.
    fn read<T: ParamValue>(&mut self, name: &str) -> Result<Option<T>> {
        let Some(entry) = self.entries.get_mut(name) else {
            return Ok(None);
        };
        let type_name = T::type_name();

        let expanded = match self.preprocessor.expand(&entry.value) {
            Ok(expanded) => expanded,
            Err(e) => return Err(self.alerts.fail(e)),
        };

        let Some(value) = T::parse_param(&expanded) else {
            return Err(self
                .alerts
                .fail(Error::conversion(name, &expanded, type_name)));
        };
        trace!("Read `{name}` as {type_name}");

        let previous = std::mem::replace(&mut entry.last_type, type_name.clone());
        let drifted = entry.referenced && previous != type_name;
        entry.referenced = true;

        if drifted {
            self.alerts.warning(format!(
                "Variable {name} referenced as two different types: {previous} and {type_name}"
            ))?;
        }

        Ok(Some(value))
    }

    fn validate<T>(
        &mut self,
        name: &str,
        value: &T,
        validators: &[&dyn Validator<T>],
    ) -> Result<()> {
        validate_all(name, value, validators).map_err(|e| self.alerts.fail(e))
    }

    /// Reports every parameter that was loaded but never read.
    ///
    /// Runs at most once; later calls do nothing. Skipped if loading never
    /// succeeded or a fatal error was already raised.
    ///
    /// # Errors
    ///
    /// In strict mode, the first unused parameter is an error.
    pub fn finalize(&mut self) -> Result<()> {
        let state = std::mem::replace(&mut self.state, State::Finalized);
        if state != State::Loaded || self.alerts.had_error() {
            return Ok(());
        }

        let unused: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| !entry.referenced)
            .map(|(name, _)| name.clone())
            .collect();

        for name in unused {
            self.alerts.warning(format!("Variable {name} is unused!"))?;
        }

        Ok(())
    }
}

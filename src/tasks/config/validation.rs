/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Checks that serde alone can't express.

use crate::config::*;
use ::failure::Error;
use ::mathkern_slice_math::NO_ROUNDING;

/// `Settings` that have passed [`Settings::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings(pub Settings);

impl ::std::ops::Deref for ValidatedSettings {
    type Target = Settings;
    fn deref(&self) -> &Settings { &self.0 }
}

impl Settings {
    pub fn validate(self) -> Result<ValidatedSettings, Error> {
        ensure!(
            self.epsilon.is_finite() && self.epsilon >= 0.0,
            "epsilon must be finite and non-negative (got {})", self.epsilon,
        );
        ensure!(
            self.quintic.tolerance.is_finite() && self.quintic.tolerance > 0.0,
            "quintic.tolerance must be finite and positive (got {})", self.quintic.tolerance,
        );
        if self.quintic.max_iterations == 0 {
            bail!("quintic.max-iterations must be at least 1");
        }
        if self.accuracy >= NO_ROUNDING {
            warn!(
                "accuracy {} is at or above {}; results will not be rounded",
                self.accuracy, NO_ROUNDING,
            );
        }
        if self.newton.max_iterations == 0 && self.polish {
            warn!("newton.max-iterations is 0, so 'polish' has no effect");
        }
        Ok(ValidatedSettings(self))
    }
}

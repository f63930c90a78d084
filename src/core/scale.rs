use std::fmt;

use crate::core::{AxisId, Domain};
use crate::error::{AxisError, AxisResult};

/// Contract of the scale collaborators mapping domain values to pixels.
///
/// The axis core only reads and rewrites domains and ranges; projection math
/// beyond `map` stays with the implementation.
pub trait Scale: fmt::Debug {
    fn domain(&self) -> Domain;

    fn set_domain(&mut self, domain: Domain);

    fn range(&self) -> (f64, f64);

    fn set_range(&mut self, range: (f64, f64));

    /// Projects a domain value into the pixel range.
    fn map(&self, value: f64) -> f64;

    /// Independent copy; mutating the copy never affects `self`.
    fn copy(&self) -> Box<dyn Scale>;

    /// Domain before zooming, when the scale tracks one.
    fn org_domain(&self) -> Option<Domain> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: Domain,
    range: (f64, f64),
    org_domain: Option<Domain>,
}

impl LinearScale {
    pub fn new(domain: Domain, range: (f64, f64)) -> AxisResult<Self> {
        if !domain.lo().is_finite() || !domain.hi().is_finite() {
            return Err(AxisError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(AxisError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain,
            range,
            org_domain: None,
        })
    }

    #[must_use]
    pub fn with_org_domain(mut self, org_domain: Domain) -> Self {
        self.org_domain = Some(org_domain);
        self
    }
}

impl Scale for LinearScale {
    fn domain(&self) -> Domain {
        self.domain
    }

    fn set_domain(&mut self, domain: Domain) {
        self.domain = domain;
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
    }

    fn map(&self, value: f64) -> f64 {
        let span = self.domain.span();
        // A collapsed domain maps everything to the middle of the range.
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain.lo()) / span
        };
        self.range.0 + normalized * (self.range.1 - self.range.0)
    }

    fn copy(&self) -> Box<dyn Scale> {
        Box::new(*self)
    }

    fn org_domain(&self) -> Option<Domain> {
        self.org_domain
    }
}

/// Live scales owned by the chart and lent to the axis core per call.
#[derive(Debug, Default)]
pub struct ScaleSet {
    pub x: Option<Box<dyn Scale>>,
    pub sub_x: Option<Box<dyn Scale>>,
    pub y: Option<Box<dyn Scale>>,
    pub y2: Option<Box<dyn Scale>>,
    pub sub_y: Option<Box<dyn Scale>>,
    pub sub_y2: Option<Box<dyn Scale>>,
    /// Zoomed x scale; takes precedence over `x` for x-axis rendering.
    pub zoom: Option<Box<dyn Scale>>,
}

impl ScaleSet {
    #[must_use]
    pub fn get(&self, id: AxisId) -> Option<&dyn Scale> {
        match id {
            AxisId::X => self.x.as_deref(),
            AxisId::SubX => self.sub_x.as_deref(),
            AxisId::Y => self.y.as_deref(),
            AxisId::Y2 => self.y2.as_deref(),
        }
    }

    pub fn get_mut(&mut self, id: AxisId) -> Option<&mut (dyn Scale + 'static)> {
        match id {
            AxisId::X => self.x.as_deref_mut(),
            AxisId::SubX => self.sub_x.as_deref_mut(),
            AxisId::Y => self.y.as_deref_mut(),
            AxisId::Y2 => self.y2.as_deref_mut(),
        }
    }

    #[must_use]
    pub fn has(&self, id: AxisId) -> bool {
        self.get(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, Scale};
    use crate::core::Domain;

    #[test]
    fn linear_scale_maps_domain_onto_range() {
        let scale = LinearScale::new(Domain::new(0.0, 10.0), (0.0, 200.0)).expect("scale");
        assert_eq!(scale.map(0.0), 0.0);
        assert_eq!(scale.map(5.0), 100.0);
        assert_eq!(scale.map(10.0), 200.0);
    }

    #[test]
    fn copy_is_independent_of_source() {
        let scale = LinearScale::new(Domain::new(0.0, 10.0), (0.0, 100.0)).expect("scale");
        let mut copy = scale.copy();
        copy.set_domain(Domain::new(-5.0, 5.0));
        assert_eq!(scale.domain(), Domain::new(0.0, 10.0));
        assert_eq!(copy.domain(), Domain::new(-5.0, 5.0));
    }

    #[test]
    fn collapsed_domain_maps_to_range_middle() {
        let scale = LinearScale::new(Domain::new(3.0, 3.0), (0.0, 50.0)).expect("scale");
        assert_eq!(scale.map(3.0), 25.0);
    }
}

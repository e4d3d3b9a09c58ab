use crate::{Axis, ElementRect, ItemMeasurement};

/// The measurement capability a host provides for a materialized element.
///
/// The engine never inspects elements beyond this call. A DOM host would report
/// `offsetLeft`/`offsetTop`/`offsetWidth`/`offsetHeight`; a retained-mode GUI would report the
/// laid-out bounds of the row widget.
pub trait Measure {
    fn rect(&self) -> ElementRect;

    /// Reads this element's measurement along `axis`, tagged with `index`.
    fn measure(&self, index: usize, axis: Axis) -> ItemMeasurement {
        let rect = self.rect();
        ItemMeasurement {
            index,
            position: axis.position(rect),
            size: axis.size(rect),
        }
    }
}

impl Measure for ElementRect {
    fn rect(&self) -> ElementRect {
        *self
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    fn rect(&self) -> ElementRect {
        (**self).rect()
    }
}

use stringmatch::Needle;

use crate::driver::Driver;
use crate::error::TodoMvcResult;

/// A check against one element. `Ok(false)` means "not yet".
pub type ElementPredicate<D> = Box<dyn Fn(&D, &<D as Driver>::Element) -> TodoMvcResult<bool>>;

/// Treat "element not there" errors as an unsatisfied condition and pass everything else on.
pub fn handle_errors(result: TodoMvcResult<bool>) -> TodoMvcResult<bool> {
    match result {
        Ok(x) => Ok(x),
        Err(e) if e.is_not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

/// True if any whitespace-separated class in `class_attr` matches.
pub fn class_matches<N: Needle>(class_attr: Option<&str>, class_name: &N) -> bool {
    class_attr.map_or(false, |classes| classes.split_whitespace().any(|c| class_name.is_match(c)))
}

pub fn element_is_displayed<D: Driver + 'static>() -> ElementPredicate<D> {
    Box::new(|driver: &D, elem: &D::Element| handle_errors(driver.is_displayed(elem)))
}

pub fn element_is_not_displayed<D: Driver + 'static>() -> ElementPredicate<D> {
    Box::new(|driver: &D, elem: &D::Element| match driver.is_displayed(elem) {
        Ok(x) => Ok(!x),
        // An element that has gone is not displayed.
        Err(e) if e.is_not_found() => Ok(true),
        Err(e) => Err(e),
    })
}

pub fn element_has_class<D, N>(class_name: N) -> ElementPredicate<D>
where
    D: Driver + 'static,
    N: Needle + 'static,
{
    Box::new(move |driver: &D, elem: &D::Element| {
        handle_errors(
            driver
                .get_attribute(elem, "class")
                .map(|attr| class_matches(attr.as_deref(), &class_name)),
        )
    })
}

pub fn element_lacks_class<D, N>(class_name: N) -> ElementPredicate<D>
where
    D: Driver + 'static,
    N: Needle + 'static,
{
    Box::new(move |driver: &D, elem: &D::Element| {
        handle_errors(
            driver
                .get_attribute(elem, "class")
                .map(|attr| !class_matches(attr.as_deref(), &class_name)),
        )
    })
}

pub fn element_has_attribute<D, S, N>(attribute_name: S, value: N) -> ElementPredicate<D>
where
    D: Driver + 'static,
    S: Into<String>,
    N: Needle + 'static,
{
    let attribute_name = attribute_name.into();
    Box::new(move |driver: &D, elem: &D::Element| {
        handle_errors(
            driver
                .get_attribute(elem, &attribute_name)
                .map(|attr| attr.map_or(false, |x| value.is_match(&x))),
        )
    })
}

pub fn element_lacks_attribute<D, S, N>(attribute_name: S, value: N) -> ElementPredicate<D>
where
    D: Driver + 'static,
    S: Into<String>,
    N: Needle + 'static,
{
    let attribute_name = attribute_name.into();
    Box::new(move |driver: &D, elem: &D::Element| {
        handle_errors(
            driver
                .get_attribute(elem, &attribute_name)
                .map(|attr| attr.map_or(true, |x| !value.is_match(&x))),
        )
    })
}

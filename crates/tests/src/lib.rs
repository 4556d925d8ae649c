#[cfg(test)]
mod common;

#[cfg(test)]
mod resource_filter_tests;

#[cfg(test)]
mod case_contact_tests;

#[cfg(test)]
mod resource_types_tests;

#[cfg(test)]
mod common;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod role_resolution_tests;

#[cfg(test)]
mod account_flow_tests;

#[cfg(test)]
mod booking_flow_tests;

#[cfg(test)]
mod payment_flow_tests;

//! Scenario tests exercising the finder against in-memory inventories.


#[cfg(test)]
mod finder {
    mod errors;
    mod integration;
}

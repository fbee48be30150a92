//! Unit and behavioural tests for the byte relay.

mod support;

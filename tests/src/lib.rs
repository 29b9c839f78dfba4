#![cfg(test)]

mod records;
mod showcase;

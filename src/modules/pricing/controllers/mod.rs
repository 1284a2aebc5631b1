pub mod pricing_controller;

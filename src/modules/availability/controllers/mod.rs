pub mod availability_controller;

pub mod descriptor_server;

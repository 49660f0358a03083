pub mod mock_reddit_server;

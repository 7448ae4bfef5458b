mod timeline_tests;

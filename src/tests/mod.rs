mod theme_tests;

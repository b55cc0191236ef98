mod funnel_tests;

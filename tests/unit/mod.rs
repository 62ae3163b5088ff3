mod greeter_tests;

//! Compiled-in question bank shipped with the site.

pub(super) type Entry = (&'static str, [&'static str; 4], u8, &'static str);

pub(super) const PYTHON: [Entry; 20] = [
    (
        "What does print(10 // 3) output?",
        ["3.33", "3", "3.0", "Error"],
        1,
        "// is floor division: the remainder is dropped.",
    ),
    (
        "Which keyword defines a function?",
        ["func", "define", "def", "function"],
        2,
        "Python functions are declared with def.",
    ),
    (
        "What is the type of [1, 2, 3]?",
        ["Tuple", "List", "Set", "Dictionary"],
        1,
        "Square brackets [] build a list.",
    ),
    (
        "How do you add an element to a list?",
        [".push()", ".add()", ".append()", ".insert()"],
        2,
        "append() adds the element at the end of the list.",
    ),
    (
        "What does print('A' * 3) output?",
        ["AAA", "A3", "Error", "A A A"],
        0,
        "Multiplying a string by a number repeats it.",
    ),
    (
        "Which of these is a valid variable name?",
        ["1name", "my-name", "my_name", "class"],
        2,
        "Names cannot start with a digit, contain '-', or be a reserved word.",
    ),
    (
        "What is bool(0)?",
        ["True", "False", "Error", "None"],
        1,
        "Zero is always falsy.",
    ),
    (
        "How do you stop a loop early?",
        ["stop", "exit", "break", "continue"],
        2,
        "break leaves the loop immediately.",
    ),
    (
        "What does range(5) produce?",
        ["Numbers 1 to 5", "Numbers 0 to 5", "Numbers 0 to 4", "An error"],
        2,
        "range starts at 0 and stops one before the given number.",
    ),
    (
        "What is 2 ** 3?",
        ["6", "5", "8", "9"],
        2,
        "** is exponentiation: 2 to the power 3 is 8.",
    ),
    (
        "Which module provides advanced math functions?",
        ["math", "sys", "os", "random"],
        0,
        "math has square roots, logarithms and more.",
    ),
    (
        "How do you convert the string '5' to a number?",
        ["to_int('5')", "int('5')", "num('5')", "str('5')"],
        1,
        "int() converts to an integer.",
    ),
    (
        "What does != mean?",
        ["Equal", "Not equal", "Greater than", "Assignment"],
        1,
        "!= means not equal.",
    ),
    (
        "What is the index of 'o' in 'Hello'?",
        ["3", "4", "5", "2"],
        1,
        "H=0, e=1, l=2, l=3, o=4.",
    ),
    (
        "How do you read input from the user?",
        ["get()", "scan()", "input()", "read()"],
        2,
        "input() pauses the program and waits for the user to type.",
    ),
    (
        "What is len('Hi')?",
        ["1", "2", "3", "0"],
        1,
        "len() returns the number of items or characters.",
    ),
    (
        "How do you write a comment?",
        ["// comment", "/* comment */", "# comment", "-- comment"],
        2,
        "A hash # starts a comment.",
    ),
    (
        "What is type(5.5)?",
        ["int", "float", "str", "double"],
        1,
        "Decimal numbers are floats.",
    ),
    (
        "Which call prints text to the screen?",
        ["echo", "console.log", "print", "printf"],
        2,
        "print is Python's output function.",
    ),
    (
        "What happens when you divide by zero?",
        ["0", "Infinity", "ZeroDivisionError", "NaN"],
        2,
        "Python raises ZeroDivisionError.",
    ),
];

pub(super) const MACHINE_LEARNING: [Entry; 20] = [
    (
        "What is the first step of an ML project?",
        ["Training", "Collecting data", "Predicting", "Evaluating"],
        1,
        "Data is the fuel: collect and clean it first.",
    ),
    (
        "Which library is used to work with tables?",
        ["NumPy", "Pandas", "Matplotlib", "Sklearn"],
        1,
        "Pandas is the go-to tool for DataFrames.",
    ),
    (
        "What does df.head() do?",
        ["Plots the data", "Deletes the data", "Shows the first 5 rows", "Trains the model"],
        2,
        "It is used to get a first look at the data.",
    ),
    (
        "What does Supervised Learning mean?",
        [
            "Learning without a teacher",
            "Data with answers (labels)",
            "Self-learning",
            "None of the above",
        ],
        1,
        "The model is shown the correct answers up front.",
    ),
    (
        "Which algorithm is used for classification?",
        ["Linear Regression", "Logistic Regression", "K-Means", "PCA"],
        1,
        "Despite its name, Logistic Regression is a classifier.",
    ),
    (
        "What does model.fit(X, y) do?",
        ["Tests the model", "Trains the model", "Plots the model", "Saves the model"],
        1,
        "fit starts the learning process.",
    ),
    (
        "How do you check for missing data?",
        ["df.isnull().sum()", "df.info()", "df.describe()", "All of the above"],
        3,
        "Each of these helps reveal gaps in the data.",
    ),
    (
        "What is the target?",
        [
            "The independent variable",
            "The column we want to predict",
            "The input data",
            "Noise",
        ],
        1,
        "The target (y) is what the model predicts.",
    ),
    (
        "In K-Means, what does K stand for?",
        [
            "The number of samples",
            "The number of clusters",
            "The number of attempts",
            "The error rate",
        ],
        1,
        "K is the number of clusters to split the data into.",
    ),
    (
        "Why use train_test_split?",
        [
            "To get more data",
            "To evaluate the model on unseen data",
            "To train faster",
            "For colouring",
        ],
        1,
        "The model is tested on data it has never seen.",
    ),
    (
        "What are features?",
        ["The outputs", "The inputs (columns)", "The errors", "The functions"],
        1,
        "Features (X) are the information used to make a prediction.",
    ),
    (
        "Which metric evaluates classification?",
        ["Accuracy", "Mean Absolute Error", "R2 Score", "Distance"],
        0,
        "Accuracy is the best-known classification metric.",
    ),
    (
        "What does df.dropna() do?",
        [
            "Drops rows with missing values",
            "Fills missing values",
            "Drops the column",
            "Duplicates the data",
        ],
        0,
        "drop means remove, na means missing.",
    ),
    (
        "What is regression?",
        [
            "Predicting a class (yes/no)",
            "Predicting a continuous number",
            "Clustering images",
            "Analysing text",
        ],
        1,
        "Regression predicts numbers such as price or age.",
    ),
    (
        "Why convert text to numbers before training?",
        [
            "To save space",
            "Because models only understand numbers",
            "For encryption",
            "It is not needed",
        ],
        1,
        "Mathematical models cannot work on raw text.",
    ),
    (
        "What is overfitting?",
        [
            "Great results on training and test data",
            "Memorising the data instead of learning it (poor test results)",
            "Poor results on both",
            "High speed",
        ],
        1,
        "The model memorised the questions without understanding the lesson.",
    ),
    (
        "What is Matplotlib for?",
        [
            "Machine learning",
            "Charts and data visualisation",
            "Web development",
            "Databases",
        ],
        1,
        "It is a plotting library.",
    ),
    (
        "What does df.shape = (150, 5) mean?",
        [
            "150 columns and 5 rows",
            "150 rows and 5 columns",
            "The file is 150kb",
            "Unknown",
        ],
        1,
        "The first number is rows, the second is columns.",
    ),
    (
        "How do you remove duplicate rows?",
        ["df.clean()", "df.unique()", "df.drop_duplicates()", "df.remove()"],
        2,
        "drop_duplicates is the right call.",
    ),
    (
        "What is Scikit-Learn?",
        [
            "A games library",
            "A UI library",
            "The best-known library of ML algorithms",
            "An audio library",
        ],
        2,
        "It is the core toolkit of an ML engineer.",
    ),
];
